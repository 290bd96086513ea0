//! Liquid AI provider (reserved)
//!
//! Holds a reference to a local GGUF model artifact. No inference engine is
//! wired up yet, so every request fails with `Error::NotImplemented`.

use super::{InsightContext, InsightProvider};
use crate::error::{Error, Result};
use crate::models::Insight;

/// Default model artifact
pub const DEFAULT_MODEL_PATH: &str = "lfm2.5-1.2b-instruct-q4_k_m.gguf";

/// Model-backed provider stub
///
/// Construction only records the model path; the file is never opened.
#[derive(Debug, Clone)]
pub struct LiquidAiProvider {
    model_path: String,
}

impl LiquidAiProvider {
    pub fn new(model_path: &str) -> Self {
        Self {
            model_path: model_path.to_string(),
        }
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}

impl Default for LiquidAiProvider {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_PATH)
    }
}

impl InsightProvider for LiquidAiProvider {
    fn get_insights(&self, _context: &InsightContext) -> Result<Vec<Insight>> {
        Err(Error::NotImplemented(
            "Liquid AI provider is not yet implemented".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "liquid_ai"
    }
}
