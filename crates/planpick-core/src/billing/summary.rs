//! Figures shown on the order summary and confirmation views.

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;

use super::proration::{prorate_charges, should_prorate, BillingPeriod};
use crate::{catalog::TAX_RATE, error::Result, models::Plan};

/// Charges that apply from the next full billing period on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextBilling {
    /// Full tax-inclusive amount
    pub amount: Decimal,
    pub date: Date,
}

/// Billing breakdown for purchasing a plan on a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub plan: &'static Plan,
    pub subtotal: Decimal,
    pub tax: Decimal,
    /// Full-period total including tax
    pub total: Decimal,
    /// Amount charged now: prorated when applicable, otherwise `total`
    pub due_today: Decimal,
    /// Days covered by a prorated charge; `None` when charging in full
    pub prorated_days: Option<u32>,
    pub next_billing: NextBilling,
}

impl OrderSummary {
    /// Summarize a purchase of `plan` made on `today`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CheckoutError::Date`] if the next billing date falls
    /// outside the supported calendar range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use planpick_core::{billing::OrderSummary, catalog::get_plan_by_id};
    ///
    /// let summary = OrderSummary::for_plan(get_plan_by_id("starter"), date(2025, 1, 1)).unwrap();
    /// assert_eq!(summary.due_today, summary.total);
    /// assert!(!summary.is_prorated());
    /// ```
    pub fn for_plan(plan: &'static Plan, today: Date) -> Result<Self> {
        let subtotal = plan.price;
        let tax = subtotal * TAX_RATE;
        let total = subtotal + tax;
        let period = BillingPeriod::containing(today);

        let (due_today, prorated_days) = if should_prorate(plan, today) {
            (
                prorate_charges(subtotal, period.days_in_month, period.remaining_days),
                Some(period.remaining_days),
            )
        } else {
            (total, None)
        };

        Ok(Self {
            plan,
            subtotal,
            tax,
            total,
            due_today,
            prorated_days,
            next_billing: NextBilling {
                amount: total,
                date: period.next_billing_date()?,
            },
        })
    }

    pub fn is_prorated(&self) -> bool {
        self.prorated_days.is_some()
    }
}

/// Receipt for a completed purchase.
///
/// The confirmation always reports the full-period charge; proration only
/// affects the amount shown as due on the order summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Confirmation {
    pub order_id: String,
    pub order_date: Date,
    pub plan: &'static Plan,
    /// Card number masked down to its last four digits
    pub payment: String,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total_charged: Decimal,
}

impl Confirmation {
    /// Build the receipt for `plan`, paid with `masked_card`, ordered at
    /// `ordered_at` (dated in the system time zone).
    pub fn new(plan: &'static Plan, masked_card: impl Into<String>, ordered_at: Timestamp) -> Self {
        let subtotal = plan.price;
        let tax = subtotal * TAX_RATE;
        Self {
            order_id: order_id(ordered_at),
            order_date: ordered_at.to_zoned(TimeZone::system()).date(),
            plan,
            payment: masked_card.into(),
            subtotal,
            tax,
            total_charged: subtotal + tax,
        }
    }

    /// Date the receipt on `order_date` instead of the order instant's
    /// calendar day.
    pub fn dated(mut self, order_date: Date) -> Self {
        self.order_date = order_date;
        self
    }
}

/// Order reference derived from the order time: `ZAP-` followed by the
/// epoch milliseconds in upper-case base 36.
pub fn order_id(ordered_at: Timestamp) -> String {
    format!("ZAP-{}", to_base36(ordered_at.as_millisecond().unsigned_abs()))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use jiff::civil::date;

    use super::*;
    use crate::catalog::get_plan_by_id;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_mid_month_starter_is_prorated() {
        let summary = OrderSummary::for_plan(get_plan_by_id("starter"), date(2025, 1, 15)).unwrap();
        assert!(summary.is_prorated());
        assert_eq!(summary.prorated_days, Some(16));
        assert_eq!(summary.subtotal, d("19.99"));
        assert_eq!(summary.tax, d("1.5992"));
        assert_eq!(summary.total, d("21.5892"));
        assert_eq!(summary.due_today, prorate_charges(d("19.99"), 31, 16));
        assert_ne!(summary.due_today, summary.total);
        assert_eq!(summary.next_billing.amount, summary.total);
        assert_eq!(summary.next_billing.date, date(2025, 2, 15));
    }

    #[test]
    fn test_first_of_month_charges_in_full() {
        let summary = OrderSummary::for_plan(get_plan_by_id("pro"), date(2025, 3, 1)).unwrap();
        assert!(!summary.is_prorated());
        assert_eq!(summary.tax, d("3.92"));
        assert_eq!(summary.due_today, d("52.92"));
    }

    #[test]
    fn test_free_plan_is_never_prorated() {
        let summary = OrderSummary::for_plan(get_plan_by_id("free"), date(2025, 1, 15)).unwrap();
        assert!(!summary.is_prorated());
        assert!(summary.due_today.is_zero());
    }

    #[test]
    fn test_confirmation_totals_are_not_prorated() {
        let ordered_at = Timestamp::from_second(1_736_899_200).unwrap();
        let receipt = Confirmation::new(get_plan_by_id("starter"), "**** **** **** 4242", ordered_at);
        assert_eq!(receipt.total_charged, d("21.5892"));
        assert_eq!(receipt.payment, "**** **** **** 4242");
        assert!(receipt.order_id.starts_with("ZAP-"));
    }

    #[test]
    fn test_dated_keeps_order_id() {
        let ordered_at = Timestamp::from_second(1_900_000_000).unwrap();
        let receipt = Confirmation::new(get_plan_by_id("pro"), "**** **** **** 4242", ordered_at)
            .dated(date(2025, 1, 15));
        assert_eq!(receipt.order_date, date(2025, 1, 15));
        assert_eq!(receipt.order_id, order_id(ordered_at));
    }

    #[test]
    fn test_order_id_is_upper_base36_millis() {
        let ordered_at = Timestamp::from_millisecond(36 * 36 + 35).unwrap();
        assert_eq!(order_id(ordered_at), "ZAP-10Z");
        assert_eq!(order_id(Timestamp::UNIX_EPOCH), "ZAP-0");
    }
}
