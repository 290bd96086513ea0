//! Mock provider
//!
//! Returns the same two canned insights for every request. Useful for demos
//! and tests without a model on disk.

use serde_json::json;

use super::{InsightContext, InsightProvider};
use crate::error::Result;
use crate::models::{Insight, InsightKind};

/// Mock insight provider with fixed output
#[derive(Debug, Clone, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl InsightProvider for MockProvider {
    fn get_insights(&self, _context: &InsightContext) -> Result<Vec<Insight>> {
        Ok(vec![
            Insight {
                text: "Based on your recent spending, you could save an estimated $50 this month by reducing impulse purchases.".to_string(),
                insight_type: InsightKind::SavingsSuggestion,
                metadata: metadata(json!({ "area": "spending_habits" })),
            },
            Insight {
                text: "You have two subscriptions in the 'Entertainment' category. Consolidating them could save you money.".to_string(),
                insight_type: InsightKind::SubscriptionAnalysis,
                metadata: metadata(json!({ "category": "Entertainment", "count": 2 })),
            },
        ])
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn metadata(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    }
}
