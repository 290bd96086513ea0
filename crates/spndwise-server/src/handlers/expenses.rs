//! Expense handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::{AppError, AppState, MessageResponse};
use spndwise_core::models::{Expense, NewExpense};

/// GET /expenses/ - List all expenses
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Expense>>, AppError> {
    Ok(Json(state.ledger.list_expenses()?))
}

/// GET /expenses/:id - Get a single expense
pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Expense>, AppError> {
    Ok(Json(state.ledger.get_expense(id)?))
}

/// POST /expenses/ - Record an expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewExpense>,
) -> Result<Json<Expense>, AppError> {
    let expense = state.ledger.create_expense(body)?;

    info!(
        id = expense.id,
        category = %expense.category,
        amount = expense.amount,
        "Expense created"
    );

    Ok(Json(expense))
}

/// PUT /expenses/:id - Replace every field of an expense
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<NewExpense>,
) -> Result<Json<Expense>, AppError> {
    let expense = state.ledger.update_expense(id, body)?;

    info!(id, "Expense updated");

    Ok(Json(expense))
}

/// DELETE /expenses/:id - Delete an expense
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.ledger.delete_expense(id)?;

    info!(id, "Expense deleted");

    Ok(Json(MessageResponse::new("Expense deleted")))
}
