//! spndwise Core Library
//!
//! Shared functionality for the spndwise subscription and expense tracker:
//! - In-memory record store for subscriptions and expenses
//! - Dashboard aggregates (monthly/yearly spend, categories, renewals)
//! - Pluggable insight providers (mock, Liquid AI)
//! - Layered settings (embedded defaults, override file, environment)

pub mod ai;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod store;

pub use ai::{
    select_provider, select_provider_with_model, InsightContext, InsightProvider,
    LiquidAiProvider, MockProvider, ProviderClient, ProviderKind,
};
pub use config::Settings;
pub use dashboard::DashboardSummary;
pub use error::{Error, Result};
pub use store::{Ledger, Record, RecordStore};
