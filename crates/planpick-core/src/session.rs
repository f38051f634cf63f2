//! Plan selection state for one checkout session.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::get_plan_by_id,
    models::{plan::FREE_PLAN_ID, Plan},
};

/// Which plan the user is looking at and which one they are on.
///
/// A session is owned by whatever drives the view sequence (normally a
/// [`crate::flow::Flow`]) and passed by reference; there is no global store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    selected_plan: String,
    current_plan: String,
}

impl Session {
    /// A fresh session with both plans set to the free plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose user is already subscribed to `plan_id`.
    pub fn with_current_plan(plan_id: impl Into<String>) -> Self {
        let plan_id = plan_id.into();
        Self {
            selected_plan: plan_id.clone(),
            current_plan: plan_id,
        }
    }

    pub fn selected_plan(&self) -> &str {
        &self.selected_plan
    }

    pub fn set_selected_plan(&mut self, plan_id: impl Into<String>) {
        self.selected_plan = plan_id.into();
    }

    pub fn current_plan(&self) -> &str {
        &self.current_plan
    }

    pub fn set_current_plan(&mut self, plan_id: impl Into<String>) {
        self.current_plan = plan_id.into();
    }

    /// Catalog entry for the selected plan (free plan for unknown ids).
    pub fn selected(&self) -> &'static Plan {
        get_plan_by_id(&self.selected_plan)
    }

    /// Catalog entry for the current plan (free plan for unknown ids).
    pub fn current(&self) -> &'static Plan {
        get_plan_by_id(&self.current_plan)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            selected_plan: FREE_PLAN_ID.to_string(),
            current_plan: FREE_PLAN_ID.to_string(),
        }
    }
}
