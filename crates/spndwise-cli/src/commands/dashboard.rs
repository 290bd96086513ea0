//! Dashboard command implementation

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use spndwise_core::Ledger;

use super::truncate;

/// Parse `--today`, falling back to the local date
pub fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    today
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()
        .context("Invalid --today format (use YYYY-MM-DD)")
        .map(|d| d.unwrap_or_else(|| Local::now().date_naive()))
}

pub fn cmd_dashboard(ledger: &Ledger, today: Option<&str>) -> Result<()> {
    let today = resolve_today(today)?;
    let summary = ledger.dashboard_summary(today)?;

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│          💰 spndwise Dashboard          │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  As of:           {}", summary.today);
    println!("  Monthly Spend:   ${:.2}", summary.monthly_spend);
    println!("  Yearly Spend:    ${:.2}", summary.yearly_spend);
    println!();
    println!(
        "  📋 Active Subscriptions: {}",
        summary.active_subscriptions_count
    );
    println!();

    if !summary.category_wise_aggregation.is_empty() {
        println!("  By Category");
        println!("   ─────────────────────────────");
        for (category, total) in &summary.category_wise_aggregation {
            println!("   {:20} │ {:>10}", truncate(category, 20), format!("${:.2}", total));
        }
        println!();
    }

    if summary.upcoming_renewals.is_empty() {
        println!("  No renewals in the next 7 days.");
    } else {
        println!("  🔔 Upcoming Renewals");
        println!("   ─────────────────────────────");
        for sub in &summary.upcoming_renewals {
            println!(
                "   {:20} │ {:>8} │ {}",
                truncate(&sub.name, 20),
                format!("${:.2}", sub.amount),
                sub.next_renewal_date
            );
        }
    }

    Ok(())
}
