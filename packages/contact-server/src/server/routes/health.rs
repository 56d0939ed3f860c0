use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    configured: bool,
    provider_ready: bool,
}

/// Health check endpoint
///
/// The process is healthy whenever it can answer; `configured` tells callers
/// whether submissions can actually reach the email provider, and
/// `provider_ready` whether the provider has been initialized yet.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        configured: state.deps.config.is_configured(),
        provider_ready: state.deps.provider_init.is_ready(),
    })
}
