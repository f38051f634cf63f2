//! Path to view mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A screen in the checkout sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// Plan picker at `/`
    Pricing,
    /// Payment form for a plan at `/checkout/:plan`
    Checkout { plan: String },
    /// Billing breakdown at `/order-summary`
    OrderSummary,
    /// Receipt at `/confirmation`
    Confirmation,
}

impl View {
    /// Resolve a path to its view, or `None` if nothing is mapped there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planpick_core::flow::View;
    ///
    /// assert_eq!(View::from_path("/"), Some(View::Pricing));
    /// assert_eq!(
    ///     View::from_path("/checkout/pro"),
    ///     Some(View::Checkout { plan: "pro".to_string() })
    /// );
    /// assert_eq!(View::from_path("/checkout/"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(View::Pricing),
            "/order-summary" => Some(View::OrderSummary),
            "/confirmation" => Some(View::Confirmation),
            _ => {
                let plan = path.strip_prefix("/checkout/")?;
                if plan.is_empty() || plan.contains('/') {
                    return None;
                }
                Some(View::Checkout {
                    plan: plan.to_string(),
                })
            }
        }
    }

    /// The path this view is mounted at.
    pub fn path(&self) -> String {
        match self {
            View::Pricing => "/".to_string(),
            View::Checkout { plan } => format!("/checkout/{plan}"),
            View::OrderSummary => "/order-summary".to_string(),
            View::Confirmation => "/confirmation".to_string(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
