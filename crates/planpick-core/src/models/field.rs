//! Checkout form fields and per-field error messages.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of checkout form fields, in form order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Contact email address
    Email,
    /// Payment card number
    CardNumber,
    /// Card expiry date (`MM/YY` or `MM/YYYY`)
    Expiry,
    /// Card security code
    Cvv,
    /// Billing ZIP code
    Zipcode,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 5] = [
        Field::Email,
        Field::CardNumber,
        Field::Expiry,
        Field::Cvv,
        Field::Zipcode,
    ];

    /// Machine name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::CardNumber => "card_number",
            Field::Expiry => "expiry",
            Field::Cvv => "cvv",
            Field::Zipcode => "zipcode",
        }
    }

    /// Label shown next to the field in forms and error lists.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::CardNumber => "Card Number",
            Field::Expiry => "Expiry Date",
            Field::Cvv => "CVV",
            Field::Zipcode => "Zipcode",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(Field::Email),
            "card_number" | "cardnumber" | "card" => Ok(Field::CardNumber),
            "expiry" => Ok(Field::Expiry),
            "cvv" => Ok(Field::Cvv),
            "zipcode" | "zip" => Ok(Field::Zipcode),
            _ => Err(format!("Invalid field: {s}")),
        }
    }
}

/// Validation messages keyed by field.
///
/// Holds at most one message per field: the message of the first rule that
/// failed for it. Iteration follows form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field unless one is already present.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Message recorded for a field, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether the field failed validation.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl std::error::Error for FieldErrors {}
