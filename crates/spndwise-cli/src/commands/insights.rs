//! Insights command implementation

use anyhow::{Context, Result};
use chrono::Local;
use spndwise_core::{select_provider_with_model, InsightContext, InsightProvider, Ledger, Settings};

pub fn cmd_insights(ledger: &Ledger, settings: &Settings, provider: Option<&str>) -> Result<()> {
    let name = provider.unwrap_or(&settings.insights.provider);
    let provider = select_provider_with_model(name, Some(settings.insights.model_path.as_str()))?;

    let summary = ledger.dashboard_summary(Local::now().date_naive())?;
    let context = match serde_json::to_value(&summary)? {
        serde_json::Value::Object(map) => map,
        _ => InsightContext::new(),
    };

    let insights = provider
        .get_insights(&context)
        .with_context(|| format!("Provider '{}' failed to generate insights", provider.name()))?;

    if insights.is_empty() {
        println!("No insights right now.");
        return Ok(());
    }

    println!();
    println!("💡 Insights ({})", provider.name());
    println!("   ─────────────────────────────────────────────────────────────");

    for insight in insights {
        println!("   [{}] {}", insight.insight_type.as_str(), insight.text);
        if !insight.metadata.is_empty() {
            println!("      {}", serde_json::Value::Object(insight.metadata));
        }
    }

    Ok(())
}
