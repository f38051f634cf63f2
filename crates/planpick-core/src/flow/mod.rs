//! The checkout view sequence.
//!
//! A [`Flow`] owns the [`Session`] and walks the user through the views:
//!
//! ```text
//! Pricing ──select_plan──▶ Checkout ──submit_checkout──▶ OrderSummary
//!    ▲                        │                             │
//!    └──────── cancel ────────┴─────────────────────────────┤
//!                                                           ▼
//!                                 Confirmation ◀──complete_purchase
//! ```
//!
//! Every transition is a synchronous method call. The session is only
//! written on plan selection, successful checkout submission, and purchase
//! completion.
//!
//! # Usage Examples
//!
//! ```rust
//! use jiff::{civil::date, Timestamp};
//! use planpick_core::{flow::{FlowBuilder, View}, models::CheckoutInput};
//!
//! let mut flow = FlowBuilder::new().with_today(Some(date(2025, 1, 15))).build();
//! flow.select_plan("starter");
//!
//! let input = CheckoutInput {
//!     email: "test@example.com".to_string(),
//!     card_number: "4242 4242 4242 4242".to_string(),
//!     expiry: "12/30".to_string(),
//!     cvv: "123".to_string(),
//!     zipcode: "12345".to_string(),
//! };
//! let form = flow.submit_checkout(&input).unwrap();
//! assert_eq!(flow.view(), &View::OrderSummary);
//!
//! let summary = flow.order_summary().unwrap();
//! assert!(summary.is_prorated());
//!
//! let receipt = flow.complete_purchase(&form, Timestamp::now());
//! assert_eq!(receipt.plan.id, "starter");
//! assert_eq!(flow.session().current_plan(), "starter");
//! ```

use jiff::{
    civil::{Date, DateTime},
    Timestamp,
};
use log::{debug, info};

pub mod builder;
pub mod route;

#[cfg(test)]
mod tests;

pub use builder::FlowBuilder;
pub use route::View;

use crate::{
    billing::{Confirmation, OrderSummary},
    error::{CheckoutError, Result},
    models::{CheckoutFormData, CheckoutInput, FieldErrors},
    session::Session,
    validation::validate_at,
};

/// Most views `back` can return through.
pub const MAX_HISTORY: usize = 32;

/// Drives one user through plan selection, checkout and confirmation.
#[derive(Debug, Clone)]
pub struct Flow {
    session: Session,
    view: View,
    history: Vec<View>,
    now: DateTime,
}

impl Flow {
    /// Creates a flow on the pricing view.
    pub(crate) fn new(session: Session, now: DateTime) -> Self {
        Self {
            session,
            view: View::Pricing,
            history: Vec::new(),
            now,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reference instant used for expiry checks.
    pub fn now(&self) -> DateTime {
        self.now
    }

    /// Reference date used for proration.
    pub fn today(&self) -> Date {
        self.now.date()
    }

    /// Go to the view mounted at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnknownRoute`] if no view is mapped there.
    pub fn navigate(&mut self, path: &str) -> Result<&View> {
        let view = View::from_path(path).ok_or_else(|| CheckoutError::unknown_route(path))?;
        self.go(view);
        Ok(&self.view)
    }

    /// Select a plan and open its checkout form.
    pub fn select_plan(&mut self, plan_id: &str) -> &View {
        self.session.set_selected_plan(plan_id);
        self.go(View::Checkout {
            plan: plan_id.to_string(),
        });
        &self.view
    }

    /// Validate the checkout form.
    ///
    /// On success the checkout's plan becomes the selected plan and the flow
    /// moves on to the order summary. On failure the flow stays put and the
    /// per-field messages are returned.
    pub fn submit_checkout(
        &mut self,
        input: &CheckoutInput,
    ) -> std::result::Result<CheckoutFormData, FieldErrors> {
        let form = validate_at(input, self.now)?;

        let plan = match &self.view {
            View::Checkout { plan } => plan.clone(),
            _ => self.session.selected_plan().to_string(),
        };
        debug!("Checkout accepted for plan '{plan}'");
        self.session.set_selected_plan(plan);
        self.go(View::OrderSummary);
        Ok(form)
    }

    /// Billing breakdown for the selected plan on the reference date.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Date`] if the next billing date is out of
    /// range.
    pub fn order_summary(&self) -> Result<OrderSummary> {
        OrderSummary::for_plan(self.session.selected(), self.today())
    }

    /// Make the selected plan current and show the receipt.
    ///
    /// The receipt is dated on the flow's reference date; `ordered_at` only
    /// feeds the order id.
    pub fn complete_purchase(&mut self, form: &CheckoutFormData, ordered_at: Timestamp) -> Confirmation {
        let plan = self.session.selected();
        self.session.set_current_plan(plan.id);
        self.go(View::Confirmation);
        info!("Purchase completed for plan '{}'", plan.id);
        Confirmation::new(plan, form.masked_card(), ordered_at).dated(self.today())
    }

    /// Return to the previous view, if there is one.
    pub fn back(&mut self) -> &View {
        if let Some(previous) = self.history.pop() {
            debug!("Navigating back from {} to {}", self.view, previous);
            self.view = previous;
        }
        &self.view
    }

    /// Abandon the current step and return to the plan picker.
    ///
    /// Navigation history is discarded, so there is nothing to go back to.
    pub fn cancel(&mut self) -> &View {
        debug!("Cancelling from {}", self.view);
        self.view = View::Pricing;
        self.history.clear();
        &self.view
    }

    fn go(&mut self, view: View) {
        debug!("Navigating from {} to {}", self.view, view);
        let previous = std::mem::replace(&mut self.view, view);
        if self.history.len() == MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(previous);
    }
}
