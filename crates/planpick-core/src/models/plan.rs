//! Plan model definition.

use rust_decimal::Decimal;
use serde::Serialize;

/// Identifier of the plan every session starts on.
pub const FREE_PLAN_ID: &str = "free";

/// A subscription plan offered in the catalog.
///
/// Plans are defined once, at compile time, in [`crate::catalog::PLANS`] and
/// are only ever read.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Plan {
    /// Stable identifier used in routes and the session
    pub id: &'static str,

    /// Human readable name
    pub name: &'static str,

    /// Short marketing badge shown on the plan card
    pub badge: &'static str,

    /// Undiscounted periodic price in currency units
    pub price: Decimal,

    /// Billing unit label (e.g. "month")
    pub period: &'static str,

    /// Task allowance label
    pub tasks: &'static str,

    /// Zap allowance label
    pub zaps: &'static str,

    /// Additional feature labels
    pub features: &'static [&'static str],

    /// Whether the plan card is highlighted
    pub featured: bool,
}

impl Plan {
    /// Whether this is the free plan, which is never prorated.
    pub fn is_free(&self) -> bool {
        self.id == FREE_PLAN_ID
    }

    /// All feature labels in card order: tasks, zaps, then extra features.
    pub fn all_features(&self) -> impl Iterator<Item = &'static str> + '_ {
        [self.tasks, self.zaps]
            .into_iter()
            .chain(self.features.iter().copied())
    }
}
