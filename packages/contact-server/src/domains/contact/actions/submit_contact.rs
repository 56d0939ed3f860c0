//! Submit contact action

use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::config::ServiceConfig;
use crate::domains::contact::classifier::{classify, ErrorKind};
use crate::domains::contact::models::{
    sanitize, ContactFormInput, ContactTemplateParams, SubmissionOutcome,
};
use crate::domains::contact::validation::validate;
use crate::kernel::{ProviderError, ServerDeps};

/// Drive one submission attempt end to end.
///
/// Never fails: every problem becomes a `SubmissionOutcome::Failure`. Exactly
/// one provider send is attempted at most; nothing is retried.
pub async fn submit_contact(input: ContactFormInput, deps: &ServerDeps) -> SubmissionOutcome {
    let config = &deps.config;

    // 1. Readiness
    if !config.is_configured() {
        warn!("Contact submission received but email service is not configured");
        return SubmissionOutcome::failure(ErrorKind::ServiceConfiguration);
    }

    // 2. One-time provider init, shared with concurrent callers
    if let Err(e) = deps
        .provider_init
        .ensure(deps.provider.clone(), &config.public_key)
        .await
    {
        return provider_failure(config, &e, "init");
    }

    // 3. Sanitize + validate
    let clean = sanitize(&input);
    let validation = validate(&clean);
    if !validation.is_valid() {
        info!(
            fields = ?validation.field_errors.keys().collect::<Vec<_>>(),
            "Contact submission rejected by validation"
        );
        return SubmissionOutcome::Failure {
            message: validation.summary(),
            error_kind: ErrorKind::ValidationError,
            field_errors: Some(validation.field_errors),
        };
    }

    // 4. Dispatch, racing the send against the timeout. The send runs as its
    //    own task so a timed-out request can finish in the background; its
    //    result is dropped with the join handle.
    let params = ContactTemplateParams::build(&clean, &config.recipient_name, chrono::Utc::now());
    let provider = deps.provider.clone();
    let service_id = config.service_id.clone();
    let template_id = config.template_id.clone();
    let send = tokio::spawn(async move { provider.send(&service_id, &template_id, &params).await });

    match tokio::time::timeout(Duration::from_millis(config.timeout_ms), send).await {
        Ok(Ok(Ok(response))) => {
            info!(status = response.status, "Contact message sent");
            SubmissionOutcome::success(response)
        }
        Ok(Ok(Err(e))) => provider_failure(config, &e, "send"),
        Ok(Err(join_error)) => {
            error!(error = %join_error, "Email provider task failed unexpectedly");
            SubmissionOutcome::failure(ErrorKind::ServerError)
        }
        Err(_) => provider_failure(config, &ProviderError::timeout(config.timeout_ms), "send"),
    }
}

fn provider_failure(config: &ServiceConfig, e: &ProviderError, stage: &str) -> SubmissionOutcome {
    let kind = classify(e);
    warn!(error_kind = %kind, status = ?e.status, stage, "Contact submission failed");
    if config.debug {
        debug!(detail = %e, stage, "Raw email provider error");
    }
    SubmissionOutcome::failure(kind)
}
