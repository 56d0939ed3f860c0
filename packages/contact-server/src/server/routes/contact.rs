use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::config::ConfigStatus;
use crate::domains::contact::{
    submit_contact, test_configuration, ContactFormInput, ErrorKind, SubmissionOutcome,
};
use crate::server::app::AppState;

/// Contact form submission endpoint
///
/// The body is always a `SubmissionOutcome`; the status code only mirrors it
/// for clients that branch on HTTP status.
pub async fn contact_handler(
    Extension(state): Extension<AppState>,
    body: Result<Json<ContactFormInput>, JsonRejection>,
) -> (StatusCode, Json<SubmissionOutcome>) {
    let input = match body {
        Ok(Json(input)) => input,
        Err(rejection) => {
            warn!(
                status = rejection.status().as_u16(),
                error = %rejection.body_text(),
                "Rejected unreadable contact form body"
            );
            return (
                StatusCode::BAD_REQUEST,
                Json(SubmissionOutcome::failure(ErrorKind::ValidationError)),
            );
        }
    };

    let outcome = submit_contact(input, &state.deps).await;
    (status_for(&outcome), Json(outcome))
}

#[derive(Debug, Serialize)]
pub struct ConfigCheckResponse {
    #[serde(flatten)]
    pub status: ConfigStatus,
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Readiness of the email provider configuration
///
/// Runs the shared provider init, so a passing check also warms the first
/// submission. Nothing is sent.
pub async fn config_status_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<ConfigCheckResponse>) {
    match test_configuration(&state.deps).await {
        Ok(status) => (
            StatusCode::OK,
            Json(ConfigCheckResponse {
                status,
                ready: true,
                error_kind: None,
                message: None,
            }),
        ),
        Err(kind) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ConfigCheckResponse {
                status: state.deps.config.status(),
                ready: false,
                error_kind: Some(kind),
                message: Some(kind.user_message()),
            }),
        ),
    }
}

pub fn status_for(outcome: &SubmissionOutcome) -> StatusCode {
    match outcome.error_kind() {
        None => StatusCode::OK,
        Some(ErrorKind::ValidationError) => StatusCode::UNPROCESSABLE_ENTITY,
        Some(ErrorKind::ServiceConfiguration) => StatusCode::SERVICE_UNAVAILABLE,
        Some(ErrorKind::TimeoutError) => StatusCode::GATEWAY_TIMEOUT,
        Some(_) => StatusCode::BAD_GATEWAY,
    }
}
