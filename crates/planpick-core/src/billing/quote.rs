//! Standalone proration quotes.

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::Serialize;

use super::proration::{checked_prorate_charges, checked_prorated_amount, BillingPeriod};
use crate::{
    error::{CheckoutError, Result},
    params::Prorate,
};

/// Breakdown of a prorated charge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProrationQuote {
    pub subtotal: Decimal,
    pub days_in_month: u32,
    pub remaining_days: u32,
    /// Pre-tax amount for the remaining days, rounded to cents
    pub prorated: Decimal,
    pub tax: Decimal,
    /// Amount charged, as returned by [`super::prorate_charges`]
    pub total: Decimal,
}

impl ProrationQuote {
    /// Quote `params`, filling in missing day counts from the billing period
    /// containing `today`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidInput`] for a negative subtotal, when
    /// more days remain than the month has, or when the charge does not fit
    /// in a [`Decimal`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::str::FromStr;
    ///
    /// use jiff::civil::date;
    /// use planpick_core::{billing::ProrationQuote, params::Prorate};
    /// use rust_decimal::Decimal;
    ///
    /// let params = Prorate {
    ///     subtotal: Decimal::from_str("19.99").unwrap(),
    ///     ..Default::default()
    /// };
    /// let quote = ProrationQuote::new(&params, date(2025, 1, 15)).unwrap();
    /// assert_eq!(quote.days_in_month, 31);
    /// assert_eq!(quote.remaining_days, 16);
    /// assert_eq!(quote.prorated, Decimal::from_str("10.32").unwrap());
    /// ```
    pub fn new(params: &Prorate, today: Date) -> Result<Self> {
        if params.subtotal < Decimal::ZERO {
            return Err(CheckoutError::invalid_input("subtotal").with_reason("must not be negative"));
        }

        let period = BillingPeriod::containing(today);
        let days_in_month = params.days_in_month.unwrap_or(period.days_in_month);
        let remaining_days = params.remaining_days.unwrap_or(period.remaining_days);

        if remaining_days > days_in_month {
            return Err(CheckoutError::invalid_input("remaining_days").with_reason(format!(
                "{remaining_days} remaining days exceed a {days_in_month}-day month"
            )));
        }

        let out_of_range = || CheckoutError::invalid_input("subtotal").with_reason("amount out of range");
        let total = checked_prorate_charges(params.subtotal, days_in_month, remaining_days)
            .ok_or_else(out_of_range)?;
        let prorated = checked_prorated_amount(params.subtotal, days_in_month, remaining_days)
            .ok_or_else(out_of_range)?;
        let tax = total - prorated;

        Ok(Self {
            subtotal: params.subtotal,
            days_in_month,
            remaining_days,
            prorated,
            tax,
            total,
        })
    }
}
