//! Dashboard figures computed over the current store contents

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::Ledger;
use crate::dashboard::{self, DashboardSummary};
use crate::error::Result;
use crate::models::Subscription;

impl Ledger {
    pub fn monthly_spend(&self, today: NaiveDate) -> Result<f64> {
        let inner = self.read()?;
        Ok(dashboard::monthly_spend(inner.expenses.list(), today))
    }

    pub fn yearly_spend(&self, today: NaiveDate) -> Result<f64> {
        let inner = self.read()?;
        Ok(dashboard::yearly_spend(inner.expenses.list(), today))
    }

    pub fn active_subscriptions_count(&self) -> Result<usize> {
        let inner = self.read()?;
        Ok(dashboard::active_subscriptions_count(
            inner.subscriptions.list(),
        ))
    }

    pub fn category_totals(&self) -> Result<BTreeMap<String, f64>> {
        let inner = self.read()?;
        Ok(dashboard::category_totals(inner.expenses.list()))
    }

    pub fn upcoming_renewals(&self, today: NaiveDate) -> Result<Vec<Subscription>> {
        let inner = self.read()?;
        Ok(dashboard::upcoming_renewals(
            inner.subscriptions.list(),
            today,
        ))
    }

    /// All dashboard figures from a single read of both stores
    pub fn dashboard_summary(&self, today: NaiveDate) -> Result<DashboardSummary> {
        let inner = self.read()?;
        Ok(DashboardSummary::compute(
            inner.subscriptions.list(),
            inner.expenses.list(),
            today,
        ))
    }
}
