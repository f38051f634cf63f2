//! Partial-period charges.

use jiff::{civil::Date, ToSpan};
use log::warn;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{catalog::TAX_RATE, error::Result, models::Plan};

/// Round a money amount to cents, half away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Tax-inclusive charge for the days left in a billing month.
///
/// The pre-tax amount `subtotal / days_in_month * remaining_days` is rounded
/// to cents first, and tax is added to the rounded amount. The result is not
/// rounded again, so it can carry more than two decimal places.
///
/// A `days_in_month` of zero yields zero.
///
/// # Panics
///
/// Panics if the amount overflows [`Decimal`]. Catalog prices never do; use
/// [`checked_prorate_charges`] for arbitrary subtotals.
///
/// # Examples
///
/// ```rust
/// use std::str::FromStr;
///
/// use planpick_core::billing::prorate_charges;
/// use rust_decimal::Decimal;
///
/// let price = Decimal::from_str("19.99").unwrap();
/// // 19.99 / 30 * 7 = 4.6643.. -> 4.66, plus 8% tax
/// assert_eq!(
///     prorate_charges(price, 30, 7),
///     Decimal::from_str("5.0328").unwrap()
/// );
/// ```
pub fn prorate_charges(subtotal: Decimal, days_in_month: u32, remaining_days: u32) -> Decimal {
    if days_in_month == 0 {
        warn!("Proration requested for a zero-day month; charging nothing");
        return Decimal::ZERO;
    }

    let daily_rate = subtotal / Decimal::from(days_in_month);
    let prorated = round_cents(daily_rate * Decimal::from(remaining_days));
    prorated + prorated * TAX_RATE
}

/// [`prorate_charges`] returning `None` instead of overflowing.
pub fn checked_prorate_charges(
    subtotal: Decimal,
    days_in_month: u32,
    remaining_days: u32,
) -> Option<Decimal> {
    let prorated = checked_prorated_amount(subtotal, days_in_month, remaining_days)?;
    prorated.checked_add(prorated.checked_mul(TAX_RATE)?)
}

/// Pre-tax charge for the remaining days, rounded to cents, or `None` on
/// overflow. A `days_in_month` of zero yields zero.
pub fn checked_prorated_amount(
    subtotal: Decimal,
    days_in_month: u32,
    remaining_days: u32,
) -> Option<Decimal> {
    if days_in_month == 0 {
        return Some(Decimal::ZERO);
    }
    subtotal
        .checked_div(Decimal::from(days_in_month))?
        .checked_mul(Decimal::from(remaining_days))
        .map(round_cents)
}

/// Whether a purchase of `plan` made on `today` is prorated.
///
/// The free plan never is, and neither is a purchase on the first of the
/// month, which starts a full period.
pub fn should_prorate(plan: &Plan, today: Date) -> bool {
    !plan.is_free() && today.day() != 1
}

/// Position of a calendar date within its billing month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    /// The date the period was computed for
    pub today: Date,
    /// Calendar days in the current month (28-31)
    pub days_in_month: u32,
    /// Days left in the month strictly after `today`
    pub remaining_days: u32,
}

impl BillingPeriod {
    /// The billing month containing `today`.
    pub fn containing(today: Date) -> Self {
        let days_in_month = today.days_in_month().unsigned_abs() as u32;
        let day = today.day().unsigned_abs() as u32;
        Self {
            today,
            days_in_month,
            remaining_days: days_in_month - day,
        }
    }

    /// Same day next month, clamped to the last day of a shorter month.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CheckoutError::Date`] past the end of the supported
    /// calendar range.
    pub fn next_billing_date(&self) -> Result<Date> {
        Ok(self.today.checked_add(1.month())?)
    }
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

    /// Reference proration with the cent rounding applied last instead.
    fn round_after_tax(subtotal: Decimal, days_in_month: u32, remaining_days: u32) -> Decimal {
        let raw = subtotal / Decimal::from(days_in_month) * Decimal::from(remaining_days);
        round_cents(raw * (Decimal::ONE + TAX_RATE))
    }

    #[test]
    fn test_full_month_is_full_price_plus_tax() {
        assert_eq!(prorate_charges(d("19.99"), 30, 30), d("19.99") * d("1.08"));
        assert_eq!(prorate_charges(d("49"), 31, 31), d("52.92"));
    }

    #[test]
    fn test_half_month() {
        // 20 / 30 * 15 = 10.00
        assert_eq!(prorate_charges(d("20"), 30, 15), d("10.80"));
    }

    #[test]
    fn test_zero_remaining_days() {
        assert_eq!(prorate_charges(d("19.99"), 30, 0), Decimal::ZERO);
        assert_eq!(prorate_charges(d("49"), 28, 0), Decimal::ZERO);
    }

    #[test]
    fn test_free_plan_never_prorates_to_nonzero() {
        assert_eq!(prorate_charges(Decimal::ZERO, 30, 15), Decimal::ZERO);
        assert_eq!(prorate_charges(Decimal::ZERO, 31, 31), Decimal::ZERO);
    }

    #[test]
    fn test_zero_day_month_is_zero() {
        assert_eq!(prorate_charges(d("19.99"), 0, 5), Decimal::ZERO);
    }

    #[test]
    fn test_february_and_long_months() {
        // 49 / 28 * 14 = 24.50
        assert_eq!(prorate_charges(d("49"), 28, 14), d("26.46"));
        // 49 / 31 * 10 = 15.806.. -> 15.81
        assert_eq!(prorate_charges(d("49"), 31, 10), d("15.81") * d("1.08"));
    }

    #[test]
    fn test_single_remaining_day() {
        // 19.99 / 30 = 0.6663.. -> 0.67
        assert_eq!(prorate_charges(d("19.99"), 30, 1), d("0.7236"));
    }

    #[test]
    fn test_tax_applies_to_prorated_amount_only() {
        // 100 / 30 * 15 = 50.00
        let result = prorate_charges(d("100"), 30, 15);
        assert_eq!(result, d("54"));
        assert_ne!(round_cents(result), d("108"));
    }

    #[test]
    fn test_rounding_happens_before_tax() {
        let result = prorate_charges(d("19.99"), 30, 7);
        assert_eq!(result, d("4.66") * d("1.08"));
        assert_eq!(round_cents(result), d("5.03"));
        assert_eq!(round_after_tax(d("19.99"), 30, 7), d("5.04"));
        assert_ne!(round_cents(result), round_after_tax(d("19.99"), 30, 7));
    }

    #[test]
    fn test_checked_matches_unchecked() {
        for (subtotal, dim, rem) in [("19.99", 30, 7), ("49", 31, 10), ("0", 30, 15), ("19.99", 0, 5)] {
            assert_eq!(
                checked_prorate_charges(d(subtotal), dim, rem),
                Some(prorate_charges(d(subtotal), dim, rem))
            );
        }
    }

    #[test]
    fn test_checked_overflow_is_none() {
        assert_eq!(checked_prorate_charges(Decimal::MAX, 30, 30), None);
        assert_eq!(checked_prorate_charges(Decimal::MAX, 1, 2), None);
    }

    #[test]
    fn test_should_prorate_policy() {
        let starter = get_plan_by_id("starter");
        let free = get_plan_by_id("free");

        assert!(should_prorate(starter, date(2025, 1, 15)));
        assert!(should_prorate(starter, date(2025, 1, 31)));
        assert!(!should_prorate(starter, date(2025, 1, 1)));
        assert!(!should_prorate(free, date(2025, 1, 15)));
    }

    #[test]
    fn test_billing_period_containing() {
        let period = BillingPeriod::containing(date(2025, 1, 15));
        assert_eq!(period.days_in_month, 31);
        assert_eq!(period.remaining_days, 16);

        let leap = BillingPeriod::containing(date(2024, 2, 10));
        assert_eq!(leap.days_in_month, 29);
        assert_eq!(leap.remaining_days, 19);

        let last_day = BillingPeriod::containing(date(2025, 4, 30));
        assert_eq!(last_day.remaining_days, 0);
    }

    #[test]
    fn test_next_billing_date_clamps() {
        let mid = BillingPeriod::containing(date(2025, 1, 15));
        assert_eq!(mid.next_billing_date().unwrap(), date(2025, 2, 15));

        let month_end = BillingPeriod::containing(date(2025, 1, 31));
        assert_eq!(month_end.next_billing_date().unwrap(), date(2025, 2, 28));
    }
}
