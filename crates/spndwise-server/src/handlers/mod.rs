//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod dashboard;
pub mod expenses;
pub mod insights;
pub mod subscriptions;

use axum::Json;

use crate::MessageResponse;

// Re-export all handlers for use in router
pub use dashboard::*;
pub use expenses::*;
pub use insights::*;
pub use subscriptions::*;

/// GET / - Welcome message
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the spndwise API"))
}
