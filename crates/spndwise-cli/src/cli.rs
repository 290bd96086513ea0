//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spndwise_core::models::{BillingCycle, SubscriptionStatus};

/// spndwise - Track subscriptions and everyday expenses
#[derive(Parser)]
#[command(name = "spndwise")]
#[command(about = "Subscription and expense tracker with spending insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to <data dir>/spndwise/config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start with an empty ledger instead of the sample records
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (overrides settings)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides settings)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show dashboard summary
    Dashboard {
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<String>,
    },

    /// Generate spending insights
    Insights {
        /// Provider name: mock, liquid_ai (defaults to settings)
        #[arg(short, long)]
        provider: Option<String>,
    },

    /// List subscriptions
    Subscriptions {
        /// Only show this status: active, cancelled
        #[arg(long)]
        status: Option<SubscriptionStatus>,

        /// Only show this billing cycle: weekly, monthly, quarterly, yearly
        #[arg(long)]
        cycle: Option<BillingCycle>,
    },

    /// List expenses
    Expenses,
}
