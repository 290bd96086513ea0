//! Subscription command implementations

use anyhow::Result;
use spndwise_core::models::{BillingCycle, Subscription, SubscriptionStatus};
use spndwise_core::Ledger;

use super::truncate;

/// Keep subscriptions matching every given filter, in store order
pub fn filter_subscriptions(
    subscriptions: Vec<Subscription>,
    status: Option<SubscriptionStatus>,
    cycle: Option<BillingCycle>,
) -> Vec<Subscription> {
    subscriptions
        .into_iter()
        .filter(|s| status.map_or(true, |status| s.status == status))
        .filter(|s| cycle.map_or(true, |cycle| s.billing_cycle == cycle))
        .collect()
}

pub fn cmd_subscriptions_list(
    ledger: &Ledger,
    status: Option<SubscriptionStatus>,
    cycle: Option<BillingCycle>,
) -> Result<()> {
    let all = ledger.list_subscriptions()?;

    if all.is_empty() {
        println!("No subscriptions yet. Add one with:");
        println!("  POST /subscriptions/ (spndwise serve)");
        return Ok(());
    }

    let subscriptions = filter_subscriptions(all, status, cycle);
    if subscriptions.is_empty() {
        println!("No subscriptions match the given filters.");
        return Ok(());
    }

    println!();
    println!("📋 Subscriptions");
    println!("   ─────────────────────────────────────────────────────────────");

    for sub in subscriptions {
        let status_icon = match sub.status {
            SubscriptionStatus::Active => "✅",
            SubscriptionStatus::Cancelled => "❌",
        };

        println!(
            "   {} {:>3} {:20} │ {:>8}/{:<9} │ {:14} │ renews {}{}",
            status_icon,
            sub.id,
            truncate(&sub.name, 20),
            format!("${:.2}", sub.amount),
            sub.billing_cycle.as_str(),
            truncate(&sub.category, 14),
            sub.next_renewal_date,
            if sub.auto_pay { " (auto-pay)" } else { "" }
        );
    }

    Ok(())
}
