//! Subscription operations

use tracing::debug;

use super::{Ledger, Record};
use crate::error::Result;
use crate::models::{NewSubscription, Subscription, SubscriptionStatus};

impl Record for Subscription {
    type New = NewSubscription;

    const KIND: &'static str = "Subscription";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_new(id: i64, new: NewSubscription) -> Self {
        Subscription {
            id,
            name: new.name,
            category: new.category,
            amount: new.amount,
            billing_cycle: new.billing_cycle,
            next_renewal_date: new.next_renewal_date,
            auto_pay: new.auto_pay,
            status: new.status,
        }
    }
}

impl Ledger {
    /// Create a subscription, assigning the next id
    pub fn create_subscription(&self, new: NewSubscription) -> Result<Subscription> {
        new.validate()?;
        let mut inner = self.write()?;
        let sub = inner.subscriptions.create(new);
        debug!(id = sub.id, name = %sub.name, "Created subscription");
        Ok(sub)
    }

    /// List all subscriptions in insertion order
    pub fn list_subscriptions(&self) -> Result<Vec<Subscription>> {
        Ok(self.read()?.subscriptions.list().to_vec())
    }

    pub fn get_subscription(&self, id: i64) -> Result<Subscription> {
        Ok(self.read()?.subscriptions.get(id)?.clone())
    }

    /// Replace all fields of a subscription (id is preserved)
    pub fn update_subscription(&self, id: i64, new: NewSubscription) -> Result<Subscription> {
        new.validate()?;
        let mut inner = self.write()?;
        inner.subscriptions.update(id, new)
    }

    pub fn delete_subscription(&self, id: i64) -> Result<Subscription> {
        let mut inner = self.write()?;
        inner.subscriptions.delete(id)
    }

    /// Mark a subscription as cancelled
    pub fn cancel_subscription(&self, id: i64) -> Result<Subscription> {
        self.set_subscription_status(id, SubscriptionStatus::Cancelled)
    }

    /// Mark a subscription as active again
    pub fn renew_subscription(&self, id: i64) -> Result<Subscription> {
        self.set_subscription_status(id, SubscriptionStatus::Active)
    }

    fn set_subscription_status(&self, id: i64, status: SubscriptionStatus) -> Result<Subscription> {
        let mut inner = self.write()?;
        let sub = inner.subscriptions.get_mut(id)?;
        sub.status = status;
        Ok(sub.clone())
    }
}
