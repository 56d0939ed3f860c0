//! Server dependencies for actions (using traits for testability)
//!
//! This module provides the dependency container used by the contact actions.
//! The email provider sits behind a trait so tests can swap in a mock.

use async_trait::async_trait;
use emailjs_client::{EmailJsClient, EmailJsError};
use secrecy::ExposeSecret;
use std::sync::Arc;

use crate::config::{Config, ServiceConfig};
use crate::domains::contact::models::ContactTemplateParams;
use crate::kernel::{BaseEmailProvider, ProviderError, ProviderInit, ProviderResponse};

// =============================================================================
// EmailJsClient provider (implements BaseEmailProvider trait)
// =============================================================================

/// Wrapper around EmailJsClient that implements BaseEmailProvider trait
pub struct EmailJsProvider(pub Arc<EmailJsClient>);

impl EmailJsProvider {
    pub fn new(client: Arc<EmailJsClient>) -> Self {
        Self(client)
    }

    /// Build a client from application config, attaching the private key if set
    pub fn from_config(config: &Config) -> Self {
        let mut client = EmailJsClient::new().with_base_url(&config.emailjs_api_url);
        if let Some(private_key) = &config.service.private_key {
            client = client.with_access_token(private_key.expose_secret());
        }
        Self::new(Arc::new(client))
    }
}

#[async_trait]
impl BaseEmailProvider for EmailJsProvider {
    async fn init(&self, public_key: &str) -> Result<(), ProviderError> {
        self.0.init(public_key).map_err(to_provider_error)
    }

    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &ContactTemplateParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.0
            .send(service_id, template_id, params)
            .await
            .map(|response| ProviderResponse {
                status: response.status,
                text: response.text,
            })
            .map_err(to_provider_error)
    }
}

/// Flatten a typed client error into the opaque shape the classifier reads.
fn to_provider_error(error: EmailJsError) -> ProviderError {
    match error {
        EmailJsError::Api { status, text } => ProviderError::with_status(status, text),
        EmailJsError::Http(e) if e.is_timeout() => ProviderError::with_message("Request timeout"),
        EmailJsError::Http(e) if e.is_connect() || e.is_request() => ProviderError {
            status: Some(0),
            message: Some(format!("Network error: {}", e.without_url())),
            text: None,
        },
        EmailJsError::Http(e) => ProviderError::with_message(e.without_url().to_string()),
        EmailJsError::Config(reason) => {
            ProviderError::with_message(format!("Service configuration error: {}", reason))
        }
        EmailJsError::NotInitialized => {
            ProviderError::with_message("Service public key not initialized")
        }
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to actions (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub config: ServiceConfig,
    pub provider: Arc<dyn BaseEmailProvider>,
    /// Shared across clones so every request sees the same init attempt
    pub provider_init: Arc<ProviderInit>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(config: ServiceConfig, provider: Arc<dyn BaseEmailProvider>) -> Self {
        Self {
            config,
            provider,
            provider_init: Arc::new(ProviderInit::new()),
        }
    }

    /// Production wiring: EmailJS over HTTP
    pub fn from_config(config: &Config) -> Self {
        let provider = EmailJsProvider::from_config(config);
        Self::new(config.service.clone(), Arc::new(provider))
    }
}
