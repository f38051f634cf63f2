//! Data models for plans and checkout forms.
//!
//! This module contains the domain models shared by the validation, billing
//! and flow layers. Display implementations for these models are located in
//! [`crate::display`] to keep data structures separate from presentation.
//!
//! - [`Plan`]: a read-only catalog entry (see [`crate::catalog`])
//! - [`CheckoutInput`]: raw strings from one form submission
//! - [`CheckoutFormData`]: the normalized form produced by validation
//! - [`Field`] and [`FieldErrors`]: per-field validation messages
//!
//! # Examples
//!
//! ```rust
//! use planpick_core::models::{CheckoutInput, Field};
//!
//! let input = CheckoutInput {
//!     email: "test@example.com".to_string(),
//!     card_number: "4242 4242 4242 4242".to_string(),
//!     expiry: "12/30".to_string(),
//!     cvv: "123".to_string(),
//!     zipcode: "12345".to_string(),
//! };
//! assert_eq!(input.value(Field::Cvv), "123");
//! ```

pub mod checkout;
pub mod field;
pub mod plan;


pub use checkout::{CheckoutFormData, CheckoutInput};
pub use field::{Field, FieldErrors};
pub use plan::Plan;
