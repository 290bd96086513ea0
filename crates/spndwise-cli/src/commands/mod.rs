//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `dashboard` - Spend figures, category totals and upcoming renewals
//! - `expenses` - Expense listing
//! - `insights` - Provider-generated insights
//! - `serve` - Web server command
//! - `subscriptions` - Subscription listing

pub mod dashboard;
pub mod expenses;
pub mod insights;
pub mod serve;
pub mod subscriptions;

use anyhow::{Context, Result};
use spndwise_core::{Ledger, Settings};

// Re-export command functions for main.rs
pub use dashboard::*;
pub use expenses::*;
pub use insights::*;
pub use serve::*;
pub use subscriptions::*;

/// Build the ledger the commands operate on
pub fn open_ledger(settings: &Settings, no_seed: bool) -> Result<Ledger> {
    if settings.seed_sample_data && !no_seed {
        Ledger::with_sample_data().context("Failed to seed sample data")
    } else {
        Ok(Ledger::new())
    }
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
