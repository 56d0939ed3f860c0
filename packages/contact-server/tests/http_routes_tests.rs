//! HTTP relay tests driven through the router with `oneshot`.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::*;
use contact_core::config::ServiceConfig;
use contact_core::domains::contact::ErrorKind;
use contact_core::kernel::{MockEmailProvider, ProviderError, SendBehavior};
use contact_core::server::build_app;

async fn post_contact(app: Router, body: Value) -> (StatusCode, Value) {
    post_raw(app, body.to_string()).await
}

async fn post_raw(app: Router, body: impl Into<String>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn valid_body() -> Value {
    json!({
        "name": "John Doe",
        "email": "john@example.com",
        "project": "Test Project",
        "message": "Hello there"
    })
}

#[tokio::test]
async fn successful_submission_returns_ok() {
    let (deps, provider) = deps_with(MockEmailProvider::new());
    let app = build_app(deps, None);

    let (status, body) = post_contact(app, valid_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(provider.send_count(), 1);
}

#[tokio::test]
async fn validation_failure_returns_unprocessable_with_field_errors() {
    let (deps, provider) = deps_with(MockEmailProvider::new());
    let app = build_app(deps, None);

    // Absent fields are treated as empty strings
    let (status, body) = post_contact(app, json!({ "name": "John" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "failure");
    assert_eq!(body["error_kind"], "VALIDATION_ERROR");
    let fields = body["field_errors"].as_object().unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields["email"], "Email is required");
    assert_eq!(provider.send_count(), 0);
}

#[tokio::test]
async fn truncated_body_returns_generic_outcome() {
    let (deps, provider) = deps_with(MockEmailProvider::new());

    let (status, body) = post_raw(build_app(deps, None), r#"{"name":"x""#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "failure");
    assert_eq!(body["error_kind"], "VALIDATION_ERROR");
    assert_eq!(body["message"], ErrorKind::ValidationError.user_message());
    assert!(!body.to_string().contains("EOF"));
    assert_eq!(provider.send_count(), 0);
}

#[tokio::test]
async fn wrongly_typed_field_returns_generic_outcome() {
    let (deps, provider) = deps_with(MockEmailProvider::new());
    let mut form = valid_body();
    form["message"] = json!(["not", "a", "string"]);

    let (status, body) = post_contact(build_app(deps, None), form).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_kind"], "VALIDATION_ERROR");
    assert!(!body.to_string().contains("invalid type"));
    assert_eq!(provider.send_count(), 0);
}

#[tokio::test]
async fn null_field_is_treated_as_missing() {
    let (deps, provider) = deps_with(MockEmailProvider::new());
    let mut form = valid_body();
    form["name"] = Value::Null;

    let (status, body) = post_contact(build_app(deps, None), form).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_kind"], "VALIDATION_ERROR");
    assert_eq!(body["field_errors"]["name"], "Name is required");
    assert_eq!(provider.send_count(), 0);
}

#[tokio::test]
async fn unconfigured_service_returns_unavailable() {
    let (deps, _) = deps_with_config(MockEmailProvider::new(), ServiceConfig::default());
    let app = build_app(deps, None);

    let (status, body) = post_contact(app, valid_body()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error_kind"], "SERVICE_CONFIGURATION");
}

#[tokio::test]
async fn provider_failures_map_to_gateway_statuses() {
    let (deps, _) = deps_with(
        MockEmailProvider::new().with_rejection(ProviderError::with_status(429, "slow down")),
    );
    let (status, body) = post_contact(build_app(deps, None), valid_body()).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error_kind"], "RATE_LIMIT");

    let config = ServiceConfig {
        timeout_ms: 20,
        ..contact_core::kernel::configured_service()
    };
    let (deps, _) =
        deps_with_config(MockEmailProvider::new().with_send(SendBehavior::Hang), config);
    let (status, body) = post_contact(build_app(deps, None), valid_body()).await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["error_kind"], "TIMEOUT_ERROR");
}

#[tokio::test]
async fn status_endpoint_hides_identifiers() {
    let (deps, _) = deps_with(MockEmailProvider::new());
    let app = build_app(deps, Some("https://portfolio.example.com"));

    let (status, body) = get_json(app, "/contact/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["configured"], true);
    assert_eq!(body["ready"], true);
    assert_eq!(body["timeout_ms"], 10_000);
    assert!(!body.to_string().contains("test_public_key"));
}

#[tokio::test]
async fn status_endpoint_initializes_provider_without_sending() {
    let (deps, provider) = deps_with(MockEmailProvider::new());
    let app = build_app(deps, None);

    let (_, before) = get_json(app.clone(), "/health").await;
    assert_eq!(before["provider_ready"], false);

    let (status, _) = get_json(app.clone(), "/contact/status").await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = get_json(app, "/health").await;
    assert_eq!(after["provider_ready"], true);
    assert_eq!(provider.init_count(), 1);
    assert_eq!(provider.send_count(), 0);
}

#[tokio::test]
async fn status_endpoint_reports_unconfigured_service() {
    let (deps, provider) = deps_with_config(MockEmailProvider::new(), ServiceConfig::default());

    let (status, body) = get_json(build_app(deps, None), "/contact/status").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["ready"], false);
    assert_eq!(body["configured"], false);
    assert_eq!(body["error_kind"], "SERVICE_CONFIGURATION");
    assert_eq!(body["message"], ErrorKind::ServiceConfiguration.user_message());
    assert_eq!(provider.init_count(), 0);
}

#[tokio::test]
async fn health_reports_configuration() {
    let (deps, _) = deps_with_config(MockEmailProvider::new(), ServiceConfig::default());

    let (status, body) = get_json(build_app(deps, None), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "ok", "configured": false, "provider_ready": false })
    );
}
