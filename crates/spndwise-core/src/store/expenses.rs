//! Expense operations

use tracing::debug;

use super::{Ledger, Record};
use crate::error::Result;
use crate::models::{Expense, NewExpense};

impl Record for Expense {
    type New = NewExpense;

    const KIND: &'static str = "Expense";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_new(id: i64, new: NewExpense) -> Self {
        Expense {
            id,
            name: new.name,
            amount: new.amount,
            category: new.category,
            date: new.date,
            payment_method: new.payment_method,
        }
    }
}

impl Ledger {
    /// Create an expense, assigning the next id
    pub fn create_expense(&self, new: NewExpense) -> Result<Expense> {
        new.validate()?;
        let mut inner = self.write()?;
        let expense = inner.expenses.create(new);
        debug!(id = expense.id, name = %expense.name, "Created expense");
        Ok(expense)
    }

    /// List all expenses in insertion order
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.read()?.expenses.list().to_vec())
    }

    pub fn get_expense(&self, id: i64) -> Result<Expense> {
        Ok(self.read()?.expenses.get(id)?.clone())
    }

    /// Replace all fields of an expense (id is preserved)
    pub fn update_expense(&self, id: i64, new: NewExpense) -> Result<Expense> {
        new.validate()?;
        let mut inner = self.write()?;
        inner.expenses.update(id, new)
    }

    pub fn delete_expense(&self, id: i64) -> Result<Expense> {
        let mut inner = self.write()?;
        inner.expenses.delete(id)
    }
}
