//! Static plan catalog.
//!
//! The catalog is fixed at compile time. [`get_plan_by_id`] never fails: an
//! unrecognized id resolves to the first entry, the free plan. Callers that
//! need to reject unknown ids use [`require_plan`].

use rust_decimal::Decimal;

use crate::{
    error::{CheckoutError, Result},
    models::{plan::FREE_PLAN_ID, Plan},
};

/// Sales tax applied to every charge (8%).
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Every plan on offer, free plan first.
pub static PLANS: [Plan; 3] = [
    Plan {
        id: FREE_PLAN_ID,
        name: "Free Plan",
        badge: "Free!",
        price: Decimal::ZERO,
        period: "month",
        tasks: "100 tasks/month",
        zaps: "5 Zaps",
        features: &["Single-step Zaps"],
        featured: true,
    },
    Plan {
        id: "starter",
        name: "Starter Plan",
        badge: "Most Popular!",
        price: Decimal::from_parts(1999, 0, 0, false, 2),
        period: "month",
        tasks: "750 tasks/month",
        zaps: "20 Zaps",
        features: &["Multi-step Zaps"],
        featured: false,
    },
    Plan {
        id: "pro",
        name: "Pro Plan",
        badge: "Advanced Features!",
        price: Decimal::from_parts(49, 0, 0, false, 0),
        period: "month",
        tasks: "2,000 tasks/month",
        zaps: "Unlimited Zaps",
        features: &["Premium apps", "Priority support"],
        featured: false,
    },
];

/// Look up a plan by id, returning `None` for unknown ids.
pub fn find_plan(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.id == id)
}

/// Look up a plan by id, falling back to the free plan for unknown ids.
///
/// # Examples
///
/// ```rust
/// use planpick_core::catalog::get_plan_by_id;
///
/// assert_eq!(get_plan_by_id("pro").name, "Pro Plan");
/// assert_eq!(get_plan_by_id("enterprise").id, "free");
/// ```
pub fn get_plan_by_id(id: &str) -> &'static Plan {
    find_plan(id).unwrap_or(&PLANS[0])
}

/// Look up a plan by id, failing with [`CheckoutError::UnknownPlan`].
pub fn require_plan(id: &str) -> Result<&'static Plan> {
    find_plan(id).ok_or_else(|| CheckoutError::unknown_plan(id))
}
