//! spndwise CLI - Subscription and expense tracker
//!
//! Usage:
//!   spndwise serve --port 3000          Start web server
//!   spndwise dashboard --today DATE     Show spend and upcoming renewals
//!   spndwise insights --provider mock   Generate spending insights

mod cli;
mod commands;


use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use spndwise_core::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    let ledger = commands::open_ledger(&settings, cli.no_seed)?;

    match cli.command {
        Commands::Serve { host, port } => {
            commands::cmd_serve(ledger, &settings, host.as_deref(), port).await
        }
        Commands::Dashboard { today } => commands::cmd_dashboard(&ledger, today.as_deref()),
        Commands::Insights { provider } => {
            commands::cmd_insights(&ledger, &settings, provider.as_deref())
        }
        Commands::Subscriptions { status, cycle } => {
            commands::cmd_subscriptions_list(&ledger, status, cycle)
        }
        Commands::Expenses => commands::cmd_expenses_list(&ledger),
    }
}
