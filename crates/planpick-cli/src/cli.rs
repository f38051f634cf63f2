//! Command handlers and clap argument wrappers
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types from `planpick_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Flow / Billing
//! ```

use anyhow::{Context, Result};
use clap::Args;
use jiff::Timestamp;
use log::{debug, info};
use planpick_core::{
    catalog::{require_plan, PLANS},
    display::{CheckoutPage, PricingPage},
    params::{Checkout, Prorate},
    CheckoutError, CheckoutInput, Flow, ProrationQuote,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::renderer::TerminalRenderer;

/// Check out a plan
///
/// Validates the payment details and shows the order summary. Mid-month
/// purchases of paid plans are prorated for the rest of the month.
#[derive(Args)]
pub struct CheckoutArgs {
    #[arg(help = "Plan to purchase (free, starter, pro)")]
    pub plan: String,
    #[arg(long, default_value = "", help = "Contact email address")]
    pub email: String,
    #[arg(
        long,
        default_value = "",
        help = "Card number; spaces and dashes are ignored"
    )]
    pub card_number: String,
    #[arg(long, default_value = "", help = "Card expiry as MM/YY or MM/YYYY")]
    pub expiry: String,
    #[arg(long, default_value = "", help = "Card security code")]
    pub cvv: String,
    #[arg(long, default_value = "", help = "Billing ZIP code (12345 or 12345-6789)")]
    pub zipcode: String,
    /// Complete the purchase and print the confirmation
    #[arg(long)]
    pub complete: bool,
}

impl From<CheckoutArgs> for Checkout {
    fn from(val: CheckoutArgs) -> Self {
        Checkout {
            plan: val.plan,
            input: CheckoutInput {
                email: val.email,
                card_number: val.card_number,
                expiry: val.expiry,
                cvv: val.cvv,
                zipcode: val.zipcode,
            },
            complete: val.complete,
        }
    }
}

/// Quote a prorated charge
///
/// Day counts default to the billing month of the reference date.
#[derive(Args)]
pub struct ProrateArgs {
    #[arg(allow_negative_numbers = true, help = "Full-period price before tax")]
    pub subtotal: Decimal,
    #[arg(long, help = "Calendar days in the billing month")]
    pub days_in_month: Option<u32>,
    #[arg(long, help = "Days left in the billing month")]
    pub remaining_days: Option<u32>,
}

impl From<ProrateArgs> for Prorate {
    fn from(val: ProrateArgs) -> Self {
        Prorate {
            subtotal: val.subtotal,
            days_in_month: val.days_in_month,
            remaining_days: val.remaining_days,
        }
    }
}

/// Runs one command against a checkout flow and renders the result.
pub struct Cli {
    flow: Flow,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(flow: Flow, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            flow,
            renderer,
            json,
        }
    }

    pub fn show_plans(&self) -> Result<()> {
        if self.json {
            return self.print_json(&PLANS);
        }
        let page = PricingPage::new(&PLANS, self.flow.session().current_plan());
        self.renderer.render(&page.to_string())
    }

    pub fn checkout(&mut self, params: &Checkout) -> Result<()> {
        let plan = require_plan(&params.plan)?;
        self.flow.select_plan(plan.id);

        let form = match self.flow.submit_checkout(&params.input) {
            Ok(form) => form,
            Err(errors) => {
                if self.json {
                    self.print_json(&serde_json::json!({ "errors": &errors }))?;
                } else {
                    self.renderer
                        .render_error(&CheckoutPage::new(plan).with_errors(&errors).to_string())?;
                }
                return Err(CheckoutError::from(errors))
                    .with_context(|| format!("Checkout for {} was rejected", plan.name));
            }
        };

        let summary = self
            .flow
            .order_summary()
            .context("Failed to build order summary")?;
        debug!("Order summary ready, due today {}", summary.due_today);

        if !params.complete {
            if self.json {
                return self.print_json(&serde_json::json!({ "summary": summary }));
            }
            return self.renderer.render(&summary.to_string());
        }

        let confirmation = self.flow.complete_purchase(&form, Timestamp::now());
        info!("Order {} completed", confirmation.order_id);

        if self.json {
            return self.print_json(&serde_json::json!({
                "summary": summary,
                "confirmation": confirmation,
            }));
        }
        self.renderer.render(&summary.to_string())?;
        println!();
        self.renderer.render(&confirmation.to_string())
    }

    pub fn prorate(&self, params: &Prorate) -> Result<()> {
        let quote = ProrationQuote::new(params, self.flow.today())?;
        if self.json {
            return self.print_json(&quote);
        }
        self.renderer.render(&quote.to_string())
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value).context("Failed to encode JSON output")?;
        println!("{output}");
        Ok(())
    }
}
