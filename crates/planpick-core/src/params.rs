//! Parameter structures for planpick operations
//!
//! Interface-independent inputs for the checkout flow and the proration
//! calculator. The CLI defines its own `clap` wrappers and converts them into
//! these types, so the core carries no command-line dependencies.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```ignore
//! // In planpick-cli/src/cli.rs
//! impl From<ProrateArgs> for Prorate {
//!     fn from(args: ProrateArgs) -> Self {
//!         Prorate {
//!             subtotal: args.subtotal,
//!             days_in_month: args.days_in_month,
//!             remaining_days: args.remaining_days,
//!         }
//!     }
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CheckoutInput;

/// Parameters for checking out a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Checkout {
    /// Catalog id of the plan being purchased
    pub plan: String,
    /// Raw form values as entered
    #[serde(flatten)]
    pub input: CheckoutInput,
    /// Complete the purchase after a successful review
    #[serde(default)]
    pub complete: bool,
}

/// Parameters for a standalone proration quote.
///
/// Day counts that are left out are taken from the billing period of the
/// reference date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prorate {
    /// Full-period price before tax
    pub subtotal: Decimal,
    /// Calendar days in the billing month
    #[serde(default)]
    pub days_in_month: Option<u32>,
    /// Days left in the billing month
    #[serde(default)]
    pub remaining_days: Option<u32>,
}
