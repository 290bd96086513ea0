//! Expense command implementations

use anyhow::Result;
use spndwise_core::Ledger;

use super::truncate;

pub fn cmd_expenses_list(ledger: &Ledger) -> Result<()> {
    let expenses = ledger.list_expenses()?;

    if expenses.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    println!();
    println!("💳 Expenses");
    println!("   ─────────────────────────────────────────────────────────────");

    let mut total = 0.0;
    for expense in &expenses {
        total += expense.amount;
        println!(
            "   {:>3} {} │ {:20} │ {:>9} │ {:14} │ {}",
            expense.id,
            expense.date,
            truncate(&expense.name, 20),
            format!("${:.2}", expense.amount),
            truncate(&expense.category, 14),
            expense.payment_method
        );
    }

    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {} expenses, ${:.2} total", expenses.len(), total);

    Ok(())
}
