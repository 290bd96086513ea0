//! spndwise Web Server
//!
//! Axum-based REST API for the spndwise subscription and expense tracker.
//!
//! - Subscription and expense CRUD over the shared in-memory ledger
//! - Dashboard aggregates with an optional `?today=` reference date
//! - Insights from a selectable provider (`?provider=`)
//! - Restrictive CORS policy and sanitized error responses

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use spndwise_core::ai::{ProviderKind, DEFAULT_MODEL_PATH};
use spndwise_core::{Ledger, Settings};

mod handlers;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Provider used by `GET /insights/` when the request does not name one
    pub default_provider: String,
    /// Model artifact handed to model-backed providers
    pub model_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            default_provider: ProviderKind::Mock.as_str().to_string(),
            model_path: DEFAULT_MODEL_PATH.to_string(),
        }
    }
}

impl From<&Settings> for ServerConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            allowed_origins: settings.server.allowed_origins.clone(),
            default_provider: settings.insights.provider.clone(),
            model_path: settings.insights.model_path.clone(),
        }
    }
}

/// Shared application state
pub struct AppState {
    pub ledger: Ledger,
    pub config: ServerConfig,
}

/// Confirmation message response
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Create the application router
pub fn create_router(ledger: Ledger, config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        ledger,
        config: config.clone(),
    });

    let app = Router::new()
        .route("/", get(handlers::root))
        // Subscriptions
        .route(
            "/subscriptions",
            get(handlers::list_subscriptions).post(handlers::create_subscription),
        )
        .route(
            "/subscriptions/",
            get(handlers::list_subscriptions).post(handlers::create_subscription),
        )
        .route(
            "/subscriptions/:id",
            get(handlers::get_subscription)
                .put(handlers::update_subscription)
                .delete(handlers::delete_subscription),
        )
        .route(
            "/subscriptions/:id/cancel",
            post(handlers::cancel_subscription),
        )
        .route(
            "/subscriptions/:id/renew",
            post(handlers::renew_subscription),
        )
        // Expenses
        .route(
            "/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route(
            "/expenses/",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route(
            "/expenses/:id",
            get(handlers::get_expense)
                .put(handlers::update_expense)
                .delete(handlers::delete_expense),
        )
        // Dashboard
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/dashboard/", get(handlers::get_dashboard))
        .route("/dashboard/monthly-spend", get(handlers::get_monthly_spend))
        .route("/dashboard/yearly-spend", get(handlers::get_yearly_spend))
        .route(
            "/dashboard/active-subscriptions-count",
            get(handlers::get_active_subscriptions_count),
        )
        .route(
            "/dashboard/category-wise-aggregation",
            get(handlers::get_category_wise_aggregation),
        )
        .route(
            "/dashboard/upcoming-renewals",
            get(handlers::get_upcoming_renewals),
        )
        // Insights
        .route("/insights", get(handlers::get_insights))
        .route("/insights/", get(handlers::get_insights));

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    };

    app.with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    ledger: Ledger,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if config.default_provider.parse::<ProviderKind>().is_err() {
        warn!(
            provider = %config.default_provider,
            "Default insight provider is not recognized; /insights/ will return 400"
        );
    } else {
        info!(provider = %config.default_provider, "Insight provider configured");
    }

    let app = create_router(ledger, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_implemented(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_IMPLEMENTED,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        } else if self.status.is_server_error() {
            warn!(status = %self.status, message = %self.message, "Request failed");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();

        // Core errors that are the caller's fault keep their message
        match err.downcast_ref::<spndwise_core::Error>() {
            Some(spndwise_core::Error::NotFound(msg)) => return Self::not_found(msg),
            Some(spndwise_core::Error::InvalidArgument(msg)) => return Self::bad_request(msg),
            Some(spndwise_core::Error::NotImplemented(msg)) => return Self::not_implemented(msg),
            _ => {}
        }

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}

#[cfg(test)]
mod tests;
