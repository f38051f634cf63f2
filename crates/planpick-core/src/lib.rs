//! Core library for the planpick subscription checkout.
//!
//! This crate holds everything behind the checkout views: the static plan
//! catalog, checkout field validation, prorated billing arithmetic, and the
//! plan selection flow that ties them together.
//!
//! # Display Architecture
//!
//! Every view renders to Markdown through [`std::fmt::Display`]:
//!
//! - **Domain Models** ([`billing`], [`models`]): order summaries,
//!   confirmations and field errors implement `Display` directly
//! - **Page Wrappers** ([`display`]): pricing and checkout pages that need
//!   extra context such as the current plan
//! - **Terminal Rendering**: rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use planpick_core::{models::CheckoutInput, FlowBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut flow = FlowBuilder::new()
//!     .with_today(Some(date(2025, 1, 15)))
//!     .build();
//!
//! flow.select_plan("starter");
//! let input = CheckoutInput {
//!     email: "test@example.com".to_string(),
//!     card_number: "4242 4242 4242 4242".to_string(),
//!     expiry: "12/30".to_string(),
//!     cvv: "123".to_string(),
//!     zipcode: "12345".to_string(),
//! };
//! flow.submit_checkout(&input)?;
//!
//! let summary = flow.order_summary()?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod billing;
pub mod catalog;
pub mod display;
pub mod error;
pub mod flow;
pub mod models;
pub mod params;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use billing::{prorate_charges, should_prorate, Confirmation, OrderSummary, ProrationQuote};
pub use catalog::{find_plan, get_plan_by_id, require_plan, PLANS, TAX_RATE};
pub use display::{CheckoutPage, Money, PricingPage};
pub use error::{CheckoutError, Result};
pub use flow::{Flow, FlowBuilder, View};
pub use models::{CheckoutFormData, CheckoutInput, Field, FieldErrors, Plan};
pub use params::{Checkout, Prorate};
pub use session::Session;
pub use validation::{luhn_check, validate, validate_at};
