//! Dashboard aggregates
//!
//! Pure functions over record slices. Nothing here mutates or reads the clock:
//! the reference date is always passed in by the caller, which keeps every
//! figure reproducible in tests.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Expense, Subscription, SubscriptionStatus};

/// Length of the upcoming-renewals window, inclusive of both ends
pub const RENEWAL_WINDOW_DAYS: i64 = 7;

/// Total spent in the calendar month containing `today`
pub fn monthly_spend(expenses: &[Expense], today: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
        .map(|e| e.amount)
        .sum()
}

/// Total spent in the calendar year containing `today`
pub fn yearly_spend(expenses: &[Expense], today: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|e| e.date.year() == today.year())
        .map(|e| e.amount)
        .sum()
}

pub fn active_subscriptions_count(subscriptions: &[Subscription]) -> usize {
    subscriptions
        .iter()
        .filter(|s| s.status == SubscriptionStatus::Active)
        .count()
}

/// Sum of expense amounts per category
///
/// Only categories with at least one expense appear.
pub fn category_totals(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    totals
}

/// Subscriptions renewing between `today` and `today + 7 days`, both inclusive,
/// in store order
pub fn upcoming_renewals(subscriptions: &[Subscription], today: NaiveDate) -> Vec<Subscription> {
    // Saturate at the last representable date
    let window_end = today
        .checked_add_signed(Duration::days(RENEWAL_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);
    subscriptions
        .iter()
        .filter(|s| s.next_renewal_date >= today && s.next_renewal_date <= window_end)
        .cloned()
        .collect()
}

/// Every dashboard figure computed from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Reference date the figures were computed for
    pub today: NaiveDate,
    pub monthly_spend: f64,
    pub yearly_spend: f64,
    pub active_subscriptions_count: usize,
    pub category_wise_aggregation: BTreeMap<String, f64>,
    pub upcoming_renewals: Vec<Subscription>,
}

impl DashboardSummary {
    pub fn compute(subscriptions: &[Subscription], expenses: &[Expense], today: NaiveDate) -> Self {
        Self {
            today,
            monthly_spend: monthly_spend(expenses, today),
            yearly_spend: yearly_spend(expenses, today),
            active_subscriptions_count: active_subscriptions_count(subscriptions),
            category_wise_aggregation: category_totals(expenses),
            upcoming_renewals: upcoming_renewals(subscriptions, today),
        }
    }
}
