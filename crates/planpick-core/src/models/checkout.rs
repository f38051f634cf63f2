//! Raw and validated checkout form payloads.

use serde::{Deserialize, Serialize};

use super::Field;

/// Raw strings entered on the checkout form, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutInput {
    /// Contact email address
    pub email: String,
    /// Card number, possibly with spaces or dashes
    pub card_number: String,
    /// Expiry date as typed
    pub expiry: String,
    /// Card security code
    pub cvv: String,
    /// Billing ZIP code
    pub zipcode: String,
}

impl CheckoutInput {
    /// Raw value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::CardNumber => &self.card_number,
            Field::Expiry => &self.expiry,
            Field::Cvv => &self.cvv,
            Field::Zipcode => &self.zipcode,
        }
    }
}

/// A checkout form that passed every field rule.
///
/// Only [`crate::validation::validate`] produces this type. `card_number`
/// holds digits only; every other field is exactly what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutFormData {
    pub email: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub zipcode: String,
}

impl CheckoutFormData {
    /// Last four digits of the card number.
    pub fn card_last_four(&self) -> &str {
        let start = self
            .card_number
            .char_indices()
            .rev()
            .nth(3)
            .map_or(0, |(i, _)| i);
        &self.card_number[start..]
    }

    /// Card number masked for display, e.g. `**** **** **** 4242`.
    pub fn masked_card(&self) -> String {
        format!("**** **** **** {}", self.card_last_four())
    }
}
