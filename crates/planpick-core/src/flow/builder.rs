//! Builder for creating and configuring Flow instances.

use jiff::{civil::Date, Zoned};

use super::Flow;
use crate::session::Session;

/// Builder for creating and configuring [`Flow`] instances.
#[derive(Debug, Clone, Default)]
pub struct FlowBuilder {
    today: Option<Date>,
    session: Option<Session>,
}

impl FlowBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the reference date.
    ///
    /// If not specified, the current date and time in the system time zone
    /// are used. A pinned date is treated as its first instant (midnight).
    pub fn with_today(mut self, today: Option<Date>) -> Self {
        if let Some(today) = today {
            self.today = Some(today);
        }
        self
    }

    /// Starts the flow from an existing session instead of a fresh one.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Builds the configured flow, positioned on the pricing view.
    pub fn build(self) -> Flow {
        let now = match self.today {
            Some(today) => today.at(0, 0, 0, 0),
            None => Zoned::now().datetime(),
        };
        Flow::new(self.session.unwrap_or_default(), now)
    }
}
