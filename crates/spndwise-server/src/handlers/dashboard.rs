//! Dashboard handlers
//!
//! Every route accepts `?today=YYYY-MM-DD`; without it the server's local date
//! is used.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use spndwise_core::models::Subscription;
use spndwise_core::DashboardSummary;

/// Query parameters shared by dashboard routes
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Reference date (YYYY-MM-DD)
    pub today: Option<String>,
}

impl DashboardQuery {
    fn resolve_today(&self) -> Result<NaiveDate, AppError> {
        match self.today.as_deref() {
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| AppError::bad_request("Invalid today date format (use YYYY-MM-DD)")),
            None => Ok(Local::now().date_naive()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MonthlySpendResponse {
    pub monthly_spend: f64,
}

#[derive(Debug, Serialize)]
pub struct YearlySpendResponse {
    pub yearly_spend: f64,
}

#[derive(Debug, Serialize)]
pub struct ActiveSubscriptionsCountResponse {
    pub active_subscriptions_count: usize,
}

/// GET /dashboard/ - All dashboard figures at once
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<DashboardSummary>, AppError> {
    let today = params.resolve_today()?;
    Ok(Json(state.ledger.dashboard_summary(today)?))
}

/// GET /dashboard/monthly-spend - Spend in the current calendar month
pub async fn get_monthly_spend(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<MonthlySpendResponse>, AppError> {
    let today = params.resolve_today()?;
    let monthly_spend = state.ledger.monthly_spend(today)?;
    Ok(Json(MonthlySpendResponse { monthly_spend }))
}

/// GET /dashboard/yearly-spend - Spend in the current calendar year
pub async fn get_yearly_spend(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<YearlySpendResponse>, AppError> {
    let today = params.resolve_today()?;
    let yearly_spend = state.ledger.yearly_spend(today)?;
    Ok(Json(YearlySpendResponse { yearly_spend }))
}

/// GET /dashboard/active-subscriptions-count
pub async fn get_active_subscriptions_count(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ActiveSubscriptionsCountResponse>, AppError> {
    let active_subscriptions_count = state.ledger.active_subscriptions_count()?;
    Ok(Json(ActiveSubscriptionsCountResponse {
        active_subscriptions_count,
    }))
}

/// GET /dashboard/category-wise-aggregation - Expense totals per category
pub async fn get_category_wise_aggregation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<String, f64>>, AppError> {
    Ok(Json(state.ledger.category_totals()?))
}

/// GET /dashboard/upcoming-renewals - Subscriptions renewing within 7 days
pub async fn get_upcoming_renewals(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<Vec<Subscription>>, AppError> {
    let today = params.resolve_today()?;
    Ok(Json(state.ledger.upcoming_renewals(today)?))
}
