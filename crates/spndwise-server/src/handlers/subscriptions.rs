//! Subscription management handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::{AppError, AppState, MessageResponse};
use spndwise_core::models::{NewSubscription, Subscription};

/// GET /subscriptions/ - List all subscriptions
pub async fn list_subscriptions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Subscription>>, AppError> {
    let subscriptions = state.ledger.list_subscriptions()?;
    Ok(Json(subscriptions))
}

/// GET /subscriptions/:id - Get a single subscription
pub async fn get_subscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Subscription>, AppError> {
    Ok(Json(state.ledger.get_subscription(id)?))
}

/// POST /subscriptions/ - Create a subscription
///
/// Any `id` in the body is ignored; the next free id is assigned.
pub async fn create_subscription(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewSubscription>,
) -> Result<Json<Subscription>, AppError> {
    let subscription = state.ledger.create_subscription(body)?;

    info!(
        id = subscription.id,
        name = %subscription.name,
        "Subscription created"
    );

    Ok(Json(subscription))
}

/// PUT /subscriptions/:id - Replace every field of a subscription
pub async fn update_subscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<NewSubscription>,
) -> Result<Json<Subscription>, AppError> {
    let subscription = state.ledger.update_subscription(id, body)?;

    info!(id, "Subscription updated");

    Ok(Json(subscription))
}

/// DELETE /subscriptions/:id - Delete a subscription
pub async fn delete_subscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let removed = state.ledger.delete_subscription(id)?;

    info!(id, name = %removed.name, "Subscription deleted");

    Ok(Json(MessageResponse::new("Subscription deleted")))
}

/// POST /subscriptions/:id/cancel - Mark subscription as cancelled
pub async fn cancel_subscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Subscription>, AppError> {
    let subscription = state.ledger.cancel_subscription(id)?;

    info!(id, "Subscription cancelled");

    Ok(Json(subscription))
}

/// POST /subscriptions/:id/renew - Mark subscription as active again
pub async fn renew_subscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Subscription>, AppError> {
    let subscription = state.ledger.renew_subscription(id)?;

    info!(id, "Subscription renewed");

    Ok(Json(subscription))
}
