//! Checkout field schema.
//!
//! Each field is described by a [`FieldSchema`]: a "required" message, an
//! optional normalizer, and an ordered list of [`Rule`]s. Rules run in order
//! and stop at the first failure, so a field reports at most one message.
//! Fields are validated independently and every failing field is reported.

use jiff::{civil::DateTime, Zoned};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::card::{is_valid_expiry, luhn_check, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::models::{CheckoutFormData, CheckoutInput, Field, FieldErrors};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static CVV_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,4}$").expect("cvv pattern is valid"));

static ZIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("zip pattern is valid"));

/// Inputs a rule may need beyond the field value itself.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext {
    /// Reference instant for expiry checks
    pub now: DateTime,
}

/// A single predicate and the message reported when it fails.
#[derive(Clone, Copy)]
pub struct Rule {
    pub check: fn(&str, &ValidationContext) -> bool,
    pub message: &'static str,
}

/// Validation contract for one checkout field.
pub struct FieldSchema {
    pub field: Field,
    /// Message reported for an empty value
    pub required: &'static str,
    /// Applied after the required check and before the rules
    pub normalize: Option<fn(&str) -> String>,
    pub rules: &'static [Rule],
}

impl FieldSchema {
    /// Run the field's rules against `raw`.
    ///
    /// Returns the normalized value, or the message of the first failing
    /// rule.
    pub fn apply(&self, raw: &str, ctx: &ValidationContext) -> Result<String, &'static str> {
        if raw.is_empty() {
            return Err(self.required);
        }

        let value = match self.normalize {
            Some(normalize) => normalize(raw),
            None => raw.to_string(),
        };

        match self.rules.iter().find(|rule| !(rule.check)(&value, ctx)) {
            Some(rule) => Err(rule.message),
            None => Ok(value),
        }
    }
}

/// The checkout form schema, in form order.
pub static CHECKOUT_SCHEMA: [FieldSchema; 5] = [
    FieldSchema {
        field: Field::Email,
        required: "Email is required",
        normalize: None,
        rules: &[Rule {
            check: is_email,
            message: "Invalid email address",
        }],
    },
    FieldSchema {
        field: Field::CardNumber,
        required: "Card number is required",
        normalize: Some(strip_card_separators),
        rules: &[
            Rule {
                check: is_card_number_shape,
                message: "Invalid card number format",
            },
            Rule {
                check: passes_luhn,
                message: "Invalid card number",
            },
        ],
    },
    FieldSchema {
        field: Field::Expiry,
        required: "Expiry date is required",
        normalize: None,
        rules: &[Rule {
            check: is_unexpired,
            message: "Invalid or expired date",
        }],
    },
    FieldSchema {
        field: Field::Cvv,
        required: "CVV is required",
        normalize: None,
        rules: &[Rule {
            check: is_cvv,
            message: "Invalid CVV",
        }],
    },
    FieldSchema {
        field: Field::Zipcode,
        required: "Zipcode is required",
        normalize: None,
        rules: &[Rule {
            check: is_zipcode,
            message: "Invalid ZIP code",
        }],
    },
];

/// Validate a checkout submission against the current local time.
pub fn validate(input: &CheckoutInput) -> Result<CheckoutFormData, FieldErrors> {
    validate_at(input, Zoned::now().datetime())
}

/// Validate a checkout submission against a fixed reference instant.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use planpick_core::{models::{CheckoutInput, Field}, validation::validate_at};
///
/// let now = date(2025, 1, 15).at(0, 0, 0, 0);
/// let input = CheckoutInput {
///     email: "test@example.com".to_string(),
///     card_number: "4242-4242-4242-4242".to_string(),
///     expiry: "12/30".to_string(),
///     cvv: String::new(),
///     zipcode: "12345".to_string(),
/// };
///
/// let errors = validate_at(&input, now).unwrap_err();
/// assert_eq!(errors.get(Field::Cvv), Some("CVV is required"));
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate_at(input: &CheckoutInput, now: DateTime) -> Result<CheckoutFormData, FieldErrors> {
    let ctx = ValidationContext { now };
    let mut errors = FieldErrors::new();
    let mut values: [String; 5] = Default::default();

    for (slot, schema) in values.iter_mut().zip(&CHECKOUT_SCHEMA) {
        match schema.apply(input.value(schema.field), &ctx) {
            Ok(value) => *slot = value,
            Err(message) => errors.insert(schema.field, message),
        }
    }

    if !errors.is_empty() {
        debug!("Checkout rejected with {} field error(s)", errors.len());
        return Err(errors);
    }

    let [email, card_number, expiry, cvv, zipcode] = values;
    Ok(CheckoutFormData {
        email,
        card_number,
        expiry,
        cvv,
        zipcode,
    })
}

/// Remove whitespace and dashes from a card number.
pub fn strip_card_separators(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

fn is_email(value: &str, _: &ValidationContext) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

fn is_card_number_shape(value: &str, _: &ValidationContext) -> bool {
    (MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&value.len())
        && value.bytes().all(|b| b.is_ascii_digit())
}

fn passes_luhn(value: &str, _: &ValidationContext) -> bool {
    luhn_check(value)
}

fn is_unexpired(value: &str, ctx: &ValidationContext) -> bool {
    is_valid_expiry(value, ctx.now)
}

fn is_cvv(value: &str, _: &ValidationContext) -> bool {
    CVV_PATTERN.is_match(value)
}

fn is_zipcode(value: &str, _: &ValidationContext) -> bool {
    ZIP_PATTERN.is_match(value)
}
