use clap::{Parser, Subcommand};
use jiff::civil::Date;

use crate::cli::{CheckoutArgs, ProrateArgs};

/// Subscription plan picker with a simulated checkout
///
/// Planpick lists the available subscription plans, validates checkout
/// details, shows the (possibly prorated) order summary, and prints a
/// confirmation for completed purchases. No payment is ever processed.
#[derive(Parser)]
#[command(version, about, name = "planpick")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit JSON instead of rendered markdown
    #[arg(long, global = true)]
    pub json: bool,

    /// Reference date for expiry checks and proration. Defaults to today
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub today: Option<Date>,

    /// Plan the account is already subscribed to
    #[arg(long, global = true, value_name = "PLAN", default_value = "free")]
    pub current_plan: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the planpick CLI
///
/// Running without a command shows the plans.
#[derive(Subcommand)]
pub enum Commands {
    /// Show every plan with its price and features
    #[command(alias = "ls")]
    Plans,
    /// Check out a plan and review the order
    #[command(alias = "buy")]
    Checkout(CheckoutArgs),
    /// Quote a prorated charge
    #[command(alias = "p")]
    Prorate(ProrateArgs),
}
