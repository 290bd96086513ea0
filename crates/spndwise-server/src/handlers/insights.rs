//! Insight handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use serde::Deserialize;
use tracing::debug;

use crate::{AppError, AppState};
use spndwise_core::models::Insight;
use spndwise_core::{select_provider_with_model, InsightContext, InsightProvider};

/// Query parameters for insights
#[derive(Debug, Deserialize)]
pub struct InsightQuery {
    /// Provider name (defaults to the configured provider)
    pub provider: Option<String>,
}

/// GET /insights/ - Generate insights with the selected provider
///
/// The current dashboard summary is passed to the provider as user context.
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
    Query(params): Query<InsightQuery>,
) -> Result<Json<Vec<Insight>>, AppError> {
    let name = params
        .provider
        .as_deref()
        .unwrap_or(&state.config.default_provider);
    let provider = select_provider_with_model(name, Some(state.config.model_path.as_str()))?;

    let summary = state.ledger.dashboard_summary(Local::now().date_naive())?;
    let context = match serde_json::to_value(&summary)? {
        serde_json::Value::Object(map) => map,
        _ => InsightContext::new(),
    };

    let insights = provider.get_insights(&context)?;

    debug!(
        provider = provider.name(),
        count = insights.len(),
        "Generated insights"
    );

    Ok(Json(insights))
}
