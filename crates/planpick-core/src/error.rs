//! Error types for the checkout library.

use thiserror::Error;

use crate::models::FieldErrors;

/// Comprehensive error type for checkout operations.
///
/// Field validation failures are ordinary data ([`FieldErrors`]) returned by
/// the schema; this enum only wraps them when a caller wants to propagate
/// them with `?` alongside other failures.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// One or more checkout fields failed validation
    #[error("Checkout form is invalid:\n{0}")]
    Validation(#[from] FieldErrors),
    /// Plan id is not in the catalog (strict lookups only)
    #[error("Plan '{id}' not found")]
    UnknownPlan { id: String },
    /// No view is mapped to the requested path
    #[error("No view for path '{path}'")]
    UnknownRoute { path: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Calendar arithmetic errors
    #[error("Date error: {source}")]
    Date {
        #[from]
        source: jiff::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CheckoutError {
        CheckoutError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CheckoutError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an unknown plan error.
    pub fn unknown_plan(id: impl Into<String>) -> Self {
        Self::UnknownPlan { id: id.into() }
    }

    /// Creates an unknown route error.
    pub fn unknown_route(path: impl Into<String>) -> Self {
        Self::UnknownRoute { path: path.into() }
    }
}

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;
