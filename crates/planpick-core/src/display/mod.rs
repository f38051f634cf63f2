//! Markdown rendering of every checkout view.
//!
//! Views are plain [`std::fmt::Display`] implementations that emit Markdown,
//! which the CLI hands to its terminal renderer. Domain types that map to a
//! single view ([`crate::billing::OrderSummary`],
//! [`crate::billing::Confirmation`], [`crate::billing::ProrationQuote`],
//! [`crate::models::FieldErrors`]) implement `Display` directly; views that
//! need extra context use small wrapper types.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │    Markdown     │
//! │ (Plan, Summary) │───▶│  Page Wrappers  │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pages`]: pricing and checkout pages, field error lists
//! - [`receipts`]: order summary, confirmation and proration breakdowns
//! - [`money`]: currency and percentage formatting
//! - [`datetime`]: calendar date formatting
//!
//! Money is always shown rounded to cents, half away from zero.

pub mod datetime;
pub mod money;
pub mod pages;
pub mod receipts;

pub use datetime::{LongDate, ShortDate};
pub use money::{Money, Percent};
pub use pages::{CheckoutPage, PlanPrice, PricingPage};
