//! Application settings
//!
//! ## Configuration Resolution
//!
//! Settings are loaded in layers, later layers winning:
//! 1. Embedded defaults (compiled into binary)
//! 2. Override file (`--config <path>`, else ~/.local/share/spndwise/config.toml)
//! 3. Environment variables (`SPNDWISE_AI_PROVIDER`, `SPNDWISE_MODEL_PATH`)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ai::{ProviderKind, DEFAULT_MODEL_PATH};
use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/spndwise.toml");

/// Environment variable selecting the insight provider
pub const PROVIDER_ENV: &str = "SPNDWISE_AI_PROVIDER";

/// Environment variable with the model artifact for model-backed providers
pub const MODEL_PATH_ENV: &str = "SPNDWISE_MODEL_PATH";

/// HTTP server settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: vec![],
        }
    }
}

/// Insight provider settings
#[derive(Debug, Clone, PartialEq)]
pub struct InsightSettings {
    /// Default provider name used when a request does not pick one
    pub provider: String,
    pub model_path: String,
}

impl Default for InsightSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Mock.as_str().to_string(),
            model_path: DEFAULT_MODEL_PATH.to_string(),
        }
    }
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server: ServerSettings,
    pub insights: InsightSettings,
    /// Load the sample records at startup
    pub seed_sample_data: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            insights: InsightSettings::default(),
            seed_sample_data: true,
        }
    }
}

impl Settings {
    /// Load settings from the default locations and the environment
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let mut settings = parse_settings(DEFAULT_CONFIG)?;

        let path = override_path
            .map(Path::to_path_buf)
            .or_else(default_config_path);
        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                apply_toml(&mut settings, &content)?;
                tracing::debug!(path = %path.display(), "Loaded settings override");
            } else if override_path.is_some() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        }

        settings.apply_env(
            std::env::var(PROVIDER_ENV).ok(),
            std::env::var(MODEL_PATH_ENV).ok(),
        );
        settings.validate()?;
        Ok(settings)
    }

    /// Apply environment overrides (empty values are ignored)
    pub fn apply_env(&mut self, provider: Option<String>, model_path: Option<String>) {
        if let Some(provider) = provider.filter(|s| !s.trim().is_empty()) {
            self.insights.provider = provider.trim().to_string();
        }
        if let Some(path) = model_path.filter(|s| !s.trim().is_empty()) {
            self.insights.model_path = path;
        }
    }

    /// Reject a provider name the selector would not recognize
    pub fn validate(&self) -> Result<()> {
        self.insights.provider.parse::<ProviderKind>()?;
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("spndwise").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    server: Option<RawServer>,
    insights: Option<RawInsights>,
    store: Option<RawStore>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
    allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    provider: Option<String>,
    model_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawStore {
    seed_sample_data: Option<bool>,
}

/// Parse a complete settings document on top of the built-in defaults
pub fn parse_settings(content: &str) -> Result<Settings> {
    let mut settings = Settings::default();
    apply_toml(&mut settings, content)?;
    Ok(settings)
}

fn apply_toml(settings: &mut Settings, content: &str) -> Result<()> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    if let Some(server) = raw.server {
        if let Some(host) = server.host {
            settings.server.host = host;
        }
        if let Some(port) = server.port {
            settings.server.port = port;
        }
        if let Some(origins) = server.allowed_origins {
            settings.server.allowed_origins = origins;
        }
    }

    if let Some(insights) = raw.insights {
        if let Some(provider) = insights.provider {
            settings.insights.provider = provider;
        }
        if let Some(path) = insights.model_path {
            settings.insights.model_path = path;
        }
    }

    if let Some(store) = raw.store {
        if let Some(seed) = store.seed_sample_data {
            settings.seed_sample_data = seed;
        }
    }

    Ok(())
}
