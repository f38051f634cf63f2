//! Order summary, confirmation and proration breakdowns.

use std::fmt;

use super::{LongDate, Money, Percent, PlanPrice, ShortDate};
use crate::{
    billing::{Confirmation, OrderSummary, ProrationQuote},
    catalog::TAX_RATE,
};

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Order Summary")?;
        writeln!(f)?;
        writeln!(f, "Review your order before completing payment")?;
        writeln!(f)?;
        writeln!(f, "## {}", self.plan.name)?;
        writeln!(f)?;
        writeln!(f, "**{}**", PlanPrice(self.plan))?;
        writeln!(f)?;

        writeln!(f, "### Plan includes")?;
        writeln!(f)?;
        for feature in self.plan.all_features() {
            writeln!(f, "- {feature}")?;
        }
        writeln!(f)?;

        writeln!(f, "### Billing details")?;
        writeln!(f)?;
        writeln!(f, "- **Plan price:** {}", Money(self.plan.price))?;
        writeln!(f, "- **Billing frequency:** Monthly")?;
        writeln!(f, "- **Subtotal:** {}", Money(self.subtotal))?;
        writeln!(f, "- **Tax ({}):** {}", Percent(TAX_RATE), Money(self.tax))?;
        writeln!(f)?;

        match self.prorated_days {
            Some(days) => {
                writeln!(
                    f,
                    "**Due today:** {} (Prorated for {} days)",
                    Money(self.due_today),
                    days
                )?;
                writeln!(f)?;
                writeln!(
                    f,
                    "Next billing: {} on {}",
                    Money(self.next_billing.amount),
                    ShortDate(&self.next_billing.date)
                )?;
            }
            None => writeln!(f, "**Due today:** {}", Money(self.due_today))?,
        }

        Ok(())
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Payment Successful")?;
        writeln!(f)?;
        writeln!(f, "Your subscription to the {} is now active.", self.plan.name)?;
        writeln!(f)?;
        writeln!(f, "## Order Confirmation #{}", self.order_id)?;
        writeln!(f)?;
        writeln!(f, "- **Date:** {}", LongDate(&self.order_date))?;
        writeln!(f, "- **Payment:** `{}`", self.payment)?;
        writeln!(f, "- **Plan:** {}", self.plan.name)?;
        writeln!(f)?;

        writeln!(f, "### What's included")?;
        writeln!(f)?;
        writeln!(f, "- {}", self.plan.tasks)?;
        writeln!(f, "- {}", self.plan.zaps)?;
        writeln!(f, "- Billed {}", PlanPrice(self.plan))?;
        writeln!(f)?;

        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "- **Subtotal:** {}", Money(self.subtotal))?;
        writeln!(f, "- **Tax ({}):** {}", Percent(TAX_RATE), Money(self.tax))?;
        writeln!(f, "- **Total charged:** {}", Money(self.total_charged))?;

        Ok(())
    }
}

impl fmt::Display for ProrationQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Prorated charge")?;
        writeln!(f)?;
        writeln!(f, "- **Subtotal:** {}", Money(self.subtotal))?;
        writeln!(
            f,
            "- **Billing period:** {} of {} days remaining",
            self.remaining_days, self.days_in_month
        )?;
        writeln!(f, "- **Prorated amount:** {}", Money(self.prorated))?;
        writeln!(f, "- **Tax ({}):** {}", Percent(TAX_RATE), Money(self.tax))?;
        writeln!(f, "- **Total:** {}", Money(self.total))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use crate::{catalog::get_plan_by_id, params::Prorate};

    use super::*;

    #[test]
    fn test_prorated_order_summary() {
        let summary = OrderSummary::for_plan(get_plan_by_id("starter"), date(2025, 1, 15)).unwrap();
        let output = summary.to_string();

        assert!(output.starts_with("# Order Summary"));
        assert!(output.contains("Review your order before completing payment"));
        assert!(output.contains("- **Plan price:** $19.99"));
        assert!(output.contains("- **Billing frequency:** Monthly"));
        assert!(output.contains("- **Tax (8%):** $1.60"));
        // 19.99 / 31 * 16 = 10.32, plus tax
        assert!(output.contains("**Due today:** $11.15 (Prorated for 16 days)"));
        assert!(output.contains("Next billing: $21.59 on Feb 15"));
    }

    #[test]
    fn test_full_price_order_summary() {
        let summary = OrderSummary::for_plan(get_plan_by_id("pro"), date(2025, 3, 1)).unwrap();
        let output = summary.to_string();

        assert!(output.contains("**Due today:** $52.92"));
        assert!(!output.contains("Prorated"));
        assert!(!output.contains("Next billing"));
    }

    #[test]
    fn test_confirmation_output() {
        let ordered_at = Timestamp::from_second(1_736_942_400).unwrap();
        let mut receipt = Confirmation::new(get_plan_by_id("starter"), "**** **** **** 4242", ordered_at);
        receipt.order_date = date(2025, 1, 15);
        let output = receipt.to_string();

        assert!(output.starts_with("# Payment Successful"));
        assert!(output.contains("Your subscription to the Starter Plan is now active."));
        assert!(output.contains(&format!("## Order Confirmation #{}", receipt.order_id)));
        assert!(output.contains("- **Date:** January 15, 2025"));
        assert!(output.contains("- **Payment:** `**** **** **** 4242`"));
        assert!(output.contains("- Billed $19.99/month"));
        assert!(output.contains("- **Total charged:** $21.59"));
    }

    #[test]
    fn test_proration_quote_output() {
        let params = Prorate {
            subtotal: rust_decimal::Decimal::new(1999, 2),
            days_in_month: Some(30),
            remaining_days: Some(7),
        };
        let output = ProrationQuote::new(&params, date(2025, 1, 15)).unwrap().to_string();
        assert!(output.contains("- **Billing period:** 7 of 30 days remaining"));
        assert!(output.contains("- **Prorated amount:** $4.66"));
        assert!(output.contains("- **Total:** $5.03"));
    }
}
