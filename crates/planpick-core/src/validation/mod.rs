//! Checkout form validation.
//!
//! - [`card`]: Luhn checksum and expiry date checks on raw strings
//! - [`schema`]: the per-field rule lists and the [`validate`] entry point
//!
//! Validation never returns an error value for control flow: a rejected form
//! comes back as [`FieldErrors`](crate::models::FieldErrors) in the `Err`
//! branch, with one message per failing field.

pub mod card;
pub mod schema;


pub use card::{is_valid_expiry, is_valid_expiry_now, luhn_check};
pub use schema::{validate, validate_at, FieldSchema, Rule, ValidationContext, CHECKOUT_SCHEMA};
