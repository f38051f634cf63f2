//! Pricing and checkout pages.

use std::fmt;

use crate::models::{Field, FieldErrors, Plan};

/// Price label as shown on plan cards, e.g. `$19.99/month`.
pub struct PlanPrice<'a>(pub &'a Plan);

impl<'a> fmt::Display for PlanPrice<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}/{}", self.0.price, self.0.period)
    }
}

/// The plan picker: one card per plan.
///
/// The plan the account is already on is marked "Current Plan"; every other
/// card offers "Select Plan".
///
/// # Examples
///
/// ```rust
/// use planpick_core::{catalog::PLANS, display::PricingPage};
///
/// let page = PricingPage::new(&PLANS, "starter").to_string();
/// assert!(page.starts_with("# Choose Your Plan"));
/// assert!(page.contains("## Starter Plan (Most Popular!)"));
/// assert!(page.contains("$19.99/month"));
/// ```
pub struct PricingPage<'a> {
    plans: &'a [Plan],
    current_plan: &'a str,
}

impl<'a> PricingPage<'a> {
    pub fn new(plans: &'a [Plan], current_plan: &'a str) -> Self {
        Self {
            plans,
            current_plan,
        }
    }
}

impl<'a> fmt::Display for PricingPage<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Choose Your Plan")?;
        writeln!(f)?;
        writeln!(f, "Choose the plan that works for you")?;

        for plan in self.plans {
            writeln!(f)?;
            writeln!(f, "## {} ({})", plan.name, plan.badge)?;
            writeln!(f)?;
            if plan.featured {
                writeln!(f, "**{}** *recommended*", PlanPrice(plan))?;
            } else {
                writeln!(f, "**{}**", PlanPrice(plan))?;
            }
            writeln!(f)?;
            for feature in plan.all_features() {
                writeln!(f, "- {feature}")?;
            }
            writeln!(f)?;
            if plan.id == self.current_plan {
                writeln!(f, "*Current Plan*")?;
            } else {
                writeln!(f, "Select Plan: `planpick checkout {}`", plan.id)?;
            }
        }

        Ok(())
    }
}

/// The checkout form for a plan, optionally annotated with the errors of a
/// rejected submission.
pub struct CheckoutPage<'a> {
    plan: &'a Plan,
    errors: Option<&'a FieldErrors>,
}

impl<'a> CheckoutPage<'a> {
    pub fn new(plan: &'a Plan) -> Self {
        Self { plan, errors: None }
    }

    /// Show the messages of a rejected submission beside each field.
    pub fn with_errors(mut self, errors: &'a FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl<'a> fmt::Display for CheckoutPage<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Complete Your Purchase")?;
        writeln!(f)?;
        writeln!(f, "## {}", self.plan.name)?;
        writeln!(f)?;
        writeln!(f, "**{}**", PlanPrice(self.plan))?;
        writeln!(f)?;

        for field in Field::ALL {
            match self.errors.and_then(|errors| errors.get(field)) {
                Some(message) => writeln!(f, "- **{}**: {}", field.label(), message)?,
                None => writeln!(f, "- {}", field.label())?,
            }
        }

        Ok(())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, message) in self.iter() {
            writeln!(f, "- {}: {}", field.label(), message)?;
        }
        Ok(())
    }
}
