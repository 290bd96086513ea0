//! Pluggable insight provider abstraction
//!
//! This module provides a provider-agnostic interface for generating
//! advisory insights from user context.
//!
//! # Architecture
//!
//! - `InsightProvider` trait: defines the interface for all providers
//! - `ProviderClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Provider implementations: `MockProvider`, `LiquidAiProvider`
//!
//! # Usage
//!
//! ```rust,ignore
//! let provider = select_provider("mock")?;
//! let insights = provider.get_insights(&InsightContext::new())?;
//! println!("{}", insights[0].text);
//! ```
//!
//! # Configuration
//!
//! Environment variables (read by `config::Settings`):
//! - `SPNDWISE_AI_PROVIDER`: Provider to use (mock, liquid_ai). Default: mock
//! - `SPNDWISE_MODEL_PATH`: Model artifact for the liquid_ai provider

mod liquid;
mod mock;

pub use liquid::{LiquidAiProvider, DEFAULT_MODEL_PATH};
pub use mock::MockProvider;

use crate::error::{Error, Result};
use crate::models::Insight;

/// Free-form user data handed to a provider
pub type InsightContext = serde_json::Map<String, serde_json::Value>;

/// Trait defining the interface for all insight providers
///
/// Providers should be Send + Sync so one instance can serve concurrent requests.
pub trait InsightProvider: Send + Sync {
    /// Produce insights for the given user context
    fn get_insights(&self, context: &InsightContext) -> Result<Vec<Insight>>;

    /// Provider name (for logging)
    fn name(&self) -> &str;
}

/// Known provider variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Mock,
    LiquidAi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::LiquidAi => "liquid_ai",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mock" => Ok(Self::Mock),
            "liquid_ai" => Ok(Self::LiquidAi),
            _ => Err(Error::InvalidArgument(format!(
                "Unknown AI provider: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Concrete provider enum
///
/// Callers hold a `ProviderClient` and never match on it; adding a variant
/// only touches this module.
#[derive(Debug, Clone)]
pub enum ProviderClient {
    /// Canned insights
    Mock(MockProvider),
    /// Local model-backed provider (not yet wired to an inference engine)
    LiquidAi(LiquidAiProvider),
}

impl ProviderClient {
    /// Build the provider for a kind. Nothing is loaded from disk.
    pub fn from_kind(kind: ProviderKind, model_path: Option<&str>) -> Self {
        match kind {
            ProviderKind::Mock => ProviderClient::Mock(MockProvider::new()),
            ProviderKind::LiquidAi => ProviderClient::LiquidAi(
                LiquidAiProvider::new(model_path.unwrap_or(DEFAULT_MODEL_PATH)),
            ),
        }
    }

    /// Create a mock provider
    pub fn mock() -> Self {
        ProviderClient::Mock(MockProvider::new())
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderClient::Mock(_) => ProviderKind::Mock,
            ProviderClient::LiquidAi(_) => ProviderKind::LiquidAi,
        }
    }
}

// Implement InsightProvider for ProviderClient by delegating to the inner provider
impl InsightProvider for ProviderClient {
    fn get_insights(&self, context: &InsightContext) -> Result<Vec<Insight>> {
        match self {
            ProviderClient::Mock(p) => p.get_insights(context),
            ProviderClient::LiquidAi(p) => p.get_insights(context),
        }
    }

    fn name(&self) -> &str {
        match self {
            ProviderClient::Mock(p) => p.name(),
            ProviderClient::LiquidAi(p) => p.name(),
        }
    }
}

/// Resolve a provider name to a provider
///
/// Recognized names are `mock` and `liquid_ai`; anything else is an
/// `InvalidArgument` error naming the value.
pub fn select_provider(name: &str) -> Result<ProviderClient> {
    select_provider_with_model(name, None)
}

/// Resolve a provider name, passing a model artifact through to providers that use one
pub fn select_provider_with_model(name: &str, model_path: Option<&str>) -> Result<ProviderClient> {
    let kind: ProviderKind = name.parse()?;
    tracing::debug!(provider = %kind, "Selected insight provider");
    Ok(ProviderClient::from_kind(kind, model_path))
}
