//! Billing arithmetic.
//!
//! - [`proration`]: prorated, tax-inclusive charges and the billing period
//!   of a calendar date
//! - [`quote`]: a standalone proration breakdown
//! - [`summary`]: the order summary and confirmation figures built on top
//!
//! All money is [`rust_decimal::Decimal`] in currency units.

pub mod proration;
pub mod quote;
pub mod summary;

pub use proration::{
    checked_prorate_charges, checked_prorated_amount, prorate_charges, round_cents, should_prorate,
    BillingPeriod,
};
pub use quote::ProrationQuote;
pub use summary::{order_id, Confirmation, NextBilling, OrderSummary};
