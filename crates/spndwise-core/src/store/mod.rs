//! In-memory record store
//!
//! This module is organized by domain:
//! - `subscriptions` - Subscription CRUD plus cancel/renew
//! - `expenses` - Expense CRUD
//! - `reports` - Dashboard aggregates over a consistent snapshot
//!
//! Records live in insertion order inside a [`RecordStore`]. The [`Ledger`]
//! owns one store per entity behind a single lock and is cheap to clone, so it
//! can be built once at startup and handed to the server and CLI.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{
    BillingCycle, Expense, NewExpense, NewSubscription, Subscription, SubscriptionStatus,
};

mod expenses;
mod reports;
mod subscriptions;

/// An entity that can live in a [`RecordStore`]
pub trait Record: Clone {
    /// Caller-supplied fields (everything except the id)
    type New;

    /// Human-readable entity name used in error messages
    const KIND: &'static str;

    fn id(&self) -> i64;

    /// Build a full record from its fields and an id
    fn from_new(id: i64, new: Self::New) -> Self;
}

/// Ordered collection of records with integer ids
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for the next created record: max existing id + 1, or 1 when empty.
    /// Ids freed by deleting the highest record are handed out again.
    pub fn next_id(&self) -> i64 {
        self.records
            .iter()
            .map(Record::id)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn create(&mut self, new: T::New) -> T {
        let record = T::from_new(self.next_id(), new);
        self.records.push(record.clone());
        record
    }

    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Result<&T> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found::<T>(id))
    }

    pub fn get_mut(&mut self, id: i64) -> Result<&mut T> {
        self.records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found::<T>(id))
    }

    /// Replace every field of a record, keeping its id and position
    pub fn update(&mut self, id: i64, new: T::New) -> Result<T> {
        let slot = self.get_mut(id)?;
        *slot = T::from_new(id, new);
        Ok(slot.clone())
    }

    pub fn delete(&mut self, id: i64) -> Result<T> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        Ok(self.records.remove(index))
    }
}

fn not_found<T: Record>(id: i64) -> Error {
    Error::NotFound(format!("{} {} not found", T::KIND, id))
}

#[derive(Debug, Default)]
struct LedgerInner {
    subscriptions: RecordStore<Subscription>,
    expenses: RecordStore<Expense>,
}

/// Shared handle to all stores
///
/// Mutations take the write lock so id assignment and insertion happen as one
/// step; reads clone a snapshot under the read lock.
#[derive(Clone, Default)]
pub struct Ledger {
    inner: Arc<RwLock<LedgerInner>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger pre-populated with the sample records
    pub fn with_sample_data() -> Result<Self> {
        let ledger = Self::new();
        ledger.seed_sample_data()?;
        Ok(ledger)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, LedgerInner>> {
        self.inner
            .read()
            .map_err(|_| Error::Store("Failed to acquire ledger read lock".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, LedgerInner>> {
        self.inner
            .write()
            .map_err(|_| Error::Store("Failed to acquire ledger write lock".into()))
    }

    /// Insert the two sample subscriptions and two sample expenses
    pub fn seed_sample_data(&self) -> Result<()> {
        let mut inner = self.write()?;

        for sub in sample_subscriptions() {
            inner.subscriptions.create(sub);
        }
        for expense in sample_expenses() {
            inner.expenses.create(expense);
        }

        info!(
            subscriptions = inner.subscriptions.len(),
            expenses = inner.expenses.len(),
            "Seeded sample data"
        );
        Ok(())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn sample_subscriptions() -> Vec<NewSubscription> {
    vec![
        NewSubscription {
            name: "Netflix".to_string(),
            category: "Entertainment".to_string(),
            amount: 15.99,
            billing_cycle: BillingCycle::Monthly,
            next_renewal_date: date(2024, 8, 1),
            auto_pay: true,
            status: SubscriptionStatus::Active,
        },
        NewSubscription {
            name: "Spotify".to_string(),
            category: "Music".to_string(),
            amount: 9.99,
            billing_cycle: BillingCycle::Monthly,
            next_renewal_date: date(2024, 7, 15),
            auto_pay: true,
            status: SubscriptionStatus::Active,
        },
    ]
}

fn sample_expenses() -> Vec<NewExpense> {
    vec![
        NewExpense {
            name: "Groceries".to_string(),
            amount: 75.50,
            category: "Food".to_string(),
            date: date(2024, 7, 10),
            payment_method: "Credit Card".to_string(),
        },
        NewExpense {
            name: "Gas".to_string(),
            amount: 40.00,
            category: "Transportation".to_string(),
            date: date(2024, 7, 12),
            payment_method: "Debit Card".to_string(),
        },
    ]
}
