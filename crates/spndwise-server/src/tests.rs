//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use spndwise_core::Ledger;
use tower::ServiceExt;

fn setup_test_app() -> Router {
    create_router(Ledger::new(), ServerConfig::default())
}

fn setup_seeded_app() -> Router {
    let ledger = Ledger::with_sample_data().unwrap();
    create_router(ledger, ServerConfig::default())
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: Router, method: &str, uri: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

fn subscription_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 3,
        "name": name,
        "category": "Testing",
        "amount": 10.0,
        "billing_cycle": "monthly",
        "next_renewal_date": "2024-08-01",
        "auto_pay": true,
        "status": "active"
    })
}

fn expense_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 3,
        "name": name,
        "amount": 25.0,
        "category": "Testing",
        "date": "2024-07-20",
        "payment_method": "Test Card"
    })
}

// ========== Root ==========

#[tokio::test]
async fn test_read_root() {
    let response = send(setup_test_app(), "GET", "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["message"], "Welcome to the spndwise API");
}

#[tokio::test]
async fn test_nosniff_header() {
    let response = send(setup_test_app(), "GET", "/").await;
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
}

// ========== Subscription API Tests ==========

#[tokio::test]
async fn test_list_subscriptions_seeded() {
    let response = send(setup_seeded_app(), "GET", "/subscriptions/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let subs = json.as_array().unwrap();
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0]["name"], "Netflix");
}

#[tokio::test]
async fn test_list_subscriptions_without_trailing_slash() {
    let response = send(setup_test_app(), "GET", "/subscriptions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_subscription_assigns_id() {
    let response = send_json(
        setup_seeded_app(),
        "POST",
        "/subscriptions/",
        subscription_body("Test Subscription"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["name"], "Test Subscription");
    // Two seeded records, so the next id is 3 regardless of the body
    assert_eq!(json["id"], 3);
}

#[tokio::test]
async fn test_create_subscription_empty_store() {
    let mut body = subscription_body("First");
    body["id"] = serde_json::json!(77);

    let response = send_json(setup_test_app(), "POST", "/subscriptions/", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["id"], 1);
}

#[tokio::test]
async fn test_create_subscription_invalid_amount() {
    let mut body = subscription_body("Bad");
    body["amount"] = serde_json::json!(-5.0);

    let response = send_json(setup_test_app(), "POST", "/subscriptions/", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("amount"));
}

#[tokio::test]
async fn test_create_subscription_missing_field() {
    let response = send_json(
        setup_test_app(),
        "POST",
        "/subscriptions/",
        serde_json::json!({ "name": "Incomplete" }),
    )
    .await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_get_subscription() {
    let response = send(setup_seeded_app(), "GET", "/subscriptions/2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["name"], "Spotify");
    assert_eq!(json["next_renewal_date"], "2024-07-15");
}

#[tokio::test]
async fn test_get_subscription_not_found() {
    let response = send(setup_seeded_app(), "GET", "/subscriptions/99999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Subscription 99999 not found");
}

#[tokio::test]
async fn test_update_subscription() {
    let ledger = Ledger::with_sample_data().unwrap();
    let app = create_router(ledger.clone(), ServerConfig::default());

    let mut body = subscription_body("Netflix Premium");
    body["amount"] = serde_json::json!(22.99);
    body["billing_cycle"] = serde_json::json!("yearly");

    let response = send_json(app, "PUT", "/subscriptions/1", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Netflix Premium");
    assert_eq!(json["billing_cycle"], "yearly");

    let stored = ledger.get_subscription(1).unwrap();
    assert_eq!(stored.name, "Netflix Premium");
    assert!((stored.amount - 22.99).abs() < 1e-9);
}

#[tokio::test]
async fn test_update_subscription_not_found() {
    let response = send_json(
        setup_seeded_app(),
        "PUT",
        "/subscriptions/42",
        subscription_body("Ghost"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_subscription() {
    let ledger = Ledger::with_sample_data().unwrap();
    let app = create_router(ledger.clone(), ServerConfig::default());

    let response = send(app.clone(), "DELETE", "/subscriptions/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["message"], "Subscription deleted");
    assert_eq!(ledger.list_subscriptions().unwrap().len(), 1);

    let response = send(app, "DELETE", "/subscriptions/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancel_and_renew_subscription() {
    let app = setup_seeded_app();

    let response = send(app.clone(), "POST", "/subscriptions/1/cancel").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "cancelled");

    // Cancelling again leaves it cancelled
    let response = send(app.clone(), "POST", "/subscriptions/1/cancel").await;
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "cancelled");

    let response = send(app, "POST", "/subscriptions/1/renew").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "active");
}

#[tokio::test]
async fn test_cancel_subscription_nonexistent() {
    let response = send(setup_test_app(), "POST", "/subscriptions/9999/cancel").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(setup_test_app(), "POST", "/subscriptions/9999/renew").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ========== Expense API Tests ==========

#[tokio::test]
async fn test_create_and_list_expenses() {
    let app = setup_seeded_app();

    let response = send_json(app.clone(), "POST", "/expenses/", expense_body("Test Expense")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["name"], "Test Expense");
    assert_eq!(json["id"], 3);

    let response = send(app, "GET", "/expenses/").await;
    let json = get_body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_expense() {
    let response = send(setup_seeded_app(), "GET", "/expenses/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["name"], "Groceries");
    assert_eq!(json["category"], "Food");
}

#[tokio::test]
async fn test_update_expense() {
    let app = setup_seeded_app();

    let response = send_json(app.clone(), "PUT", "/expenses/2", expense_body("Train")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(app, "GET", "/expenses/2").await;
    let json = get_body_json(response).await;
    assert_eq!(json["id"], 2);
    assert_eq!(json["name"], "Train");
    assert_eq!(json["date"], "2024-07-20");
}

#[tokio::test]
async fn test_delete_expense() {
    let app = setup_seeded_app();

    let response = send(app.clone(), "DELETE", "/expenses/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["message"], "Expense deleted");

    let response = send(app, "GET", "/expenses/2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expense_not_found() {
    let app = setup_test_app();

    let response = send(app.clone(), "GET", "/expenses/5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send_json(app.clone(), "PUT", "/expenses/5", expense_body("X")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(app, "DELETE", "/expenses/5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ========== Dashboard API Tests ==========

#[tokio::test]
async fn test_monthly_spend() {
    let response = send(
        setup_seeded_app(),
        "GET",
        "/dashboard/monthly-spend?today=2024-07-15",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!((json["monthly_spend"].as_f64().unwrap() - 115.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_monthly_spend_other_month() {
    let response = send(
        setup_seeded_app(),
        "GET",
        "/dashboard/monthly-spend?today=2024-08-01",
    )
    .await;

    let json = get_body_json(response).await;
    assert_eq!(json["monthly_spend"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn test_monthly_spend_default_today() {
    let response = send(setup_test_app(), "GET", "/dashboard/monthly-spend").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["monthly_spend"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn test_yearly_spend() {
    let response = send(
        setup_seeded_app(),
        "GET",
        "/dashboard/yearly-spend?today=2024-12-31",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!((json["yearly_spend"].as_f64().unwrap() - 115.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_dashboard_invalid_date() {
    let response = send(
        setup_seeded_app(),
        "GET",
        "/dashboard/yearly-spend?today=15-07-2024",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_active_subscriptions_count() {
    let app = setup_seeded_app();
    send(app.clone(), "POST", "/subscriptions/2/cancel").await;

    let response = send(app, "GET", "/dashboard/active-subscriptions-count").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["active_subscriptions_count"], 1);
}

#[tokio::test]
async fn test_category_wise_aggregation() {
    let response = send(
        setup_seeded_app(),
        "GET",
        "/dashboard/category-wise-aggregation",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let map = json.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert!((map["Food"].as_f64().unwrap() - 75.5).abs() < 1e-9);
    assert!((map["Transportation"].as_f64().unwrap() - 40.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_category_wise_aggregation_empty() {
    let response = send(
        setup_test_app(),
        "GET",
        "/dashboard/category-wise-aggregation",
    )
    .await;

    let json = get_body_json(response).await;
    assert!(json.as_object().unwrap().is_empty());
}

#[tokio::test]
async fn test_upcoming_renewals() {
    let app = setup_seeded_app();

    // Netflix renews 2024-08-01: exactly 7 days after 2024-07-25
    let response = send(
        app.clone(),
        "GET",
        "/dashboard/upcoming-renewals?today=2024-07-25",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let renewals = json.as_array().unwrap();
    assert_eq!(renewals.len(), 1);
    assert_eq!(renewals[0]["name"], "Netflix");

    // 8 days out is excluded
    let response = send(app, "GET", "/dashboard/upcoming-renewals?today=2024-07-24").await;
    let json = get_body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_upcoming_renewals_last_representable_date() {
    let app = setup_seeded_app();

    let response = send(
        app.clone(),
        "GET",
        "/dashboard/upcoming-renewals?today=%2B262142-12-28",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());

    let response = send(app, "GET", "/dashboard/?today=%2B262142-12-28").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_dashboard_summary() {
    let response = send(setup_seeded_app(), "GET", "/dashboard/?today=2024-07-15").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["today"], "2024-07-15");
    assert!((json["monthly_spend"].as_f64().unwrap() - 115.5).abs() < 1e-9);
    assert_eq!(json["active_subscriptions_count"], 2);
    assert_eq!(json["upcoming_renewals"].as_array().unwrap().len(), 1);
}

// ========== Insight API Tests ==========

#[tokio::test]
async fn test_get_insights_default_provider() {
    let response = send(setup_seeded_app(), "GET", "/insights/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let insights = json.as_array().unwrap();
    assert_eq!(insights.len(), 2);
    assert!(insights[0].get("text").is_some());
    assert_eq!(insights[0]["type"], "savings_suggestion");
    assert_eq!(insights[1]["metadata"]["count"], 2);
}

#[tokio::test]
async fn test_get_insights_liquid_ai_not_implemented() {
    let response = send(setup_test_app(), "GET", "/insights/?provider=liquid_ai").await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn test_get_insights_unknown_provider() {
    let response = send(setup_test_app(), "GET", "/insights?provider=unknown").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("unknown"));
}

#[tokio::test]
async fn test_get_insights_configured_provider() {
    let config = ServerConfig {
        default_provider: "liquid_ai".to_string(),
        ..Default::default()
    };
    let app = create_router(Ledger::new(), config);

    let response = send(app.clone(), "GET", "/insights/").await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

    // An explicit provider wins over the configured default
    let response = send(app, "GET", "/insights/?provider=mock").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ========== Error Mapping ==========

#[test]
fn test_app_error_from_core_errors() {
    let cases = [
        (spndwise_core::Error::NotFound("x".into()), StatusCode::NOT_FOUND),
        (spndwise_core::Error::InvalidArgument("x".into()), StatusCode::BAD_REQUEST),
        (spndwise_core::Error::NotImplemented("x".into()), StatusCode::NOT_IMPLEMENTED),
        (spndwise_core::Error::Store("poisoned".into()), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (err, expected) in cases {
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn test_internal_error_body_is_generic() {
    let err = AppError::from(spndwise_core::Error::Store("poisoned".into()));
    let json = get_body_json(err.into_response()).await;
    assert_eq!(json["error"], "An internal error occurred");
}

#[test]
fn test_server_config_from_settings() {
    let mut settings = Settings::default();
    settings.insights.provider = "liquid_ai".to_string();
    settings.server.allowed_origins = vec!["http://localhost:5173".to_string()];

    let config = ServerConfig::from(&settings);
    assert_eq!(config.default_provider, "liquid_ai");
    assert_eq!(config.allowed_origins.len(), 1);
}
