//! Planpick CLI Application
//!
//! Command-line front end for the planpick plan picker and checkout.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use planpick_core::{FlowBuilder, Session};
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        json,
        today,
        current_plan,
        command,
    } = Args::parse();

    let flow = FlowBuilder::new()
        .with_today(today)
        .with_session(Session::with_current_plan(current_plan))
        .build();

    let renderer = TerminalRenderer::new(!no_color);

    info!("Planpick started");

    let mut cli = Cli::new(flow, renderer, json);
    match command {
        Some(Checkout(args)) => cli.checkout(&args.into()),
        Some(Prorate(args)) => cli.prorate(&args.into()),
        Some(Plans) | None => cli.show_plans(),
    }
}
