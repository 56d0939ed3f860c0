// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Validation and classification live in the contact domain.
//
// Naming convention: Base* for trait names (e.g., BaseEmailProvider)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domains::contact::models::ContactTemplateParams;

// =============================================================================
// Email Provider Trait (Infrastructure - transactional email)
// =============================================================================

/// Provider acknowledgement of a delivered template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    pub text: String,
}

/// Opaque provider failure. Providers rarely expose structured errors, so this
/// only carries what they give back: an optional status and free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderError {
    pub status: Option<u16>,
    pub message: Option<String>,
    pub text: Option<String>,
}

impl ProviderError {
    pub fn with_status(status: u16, text: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: None,
            text: Some(text.into()),
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: Some(message.into()),
            text: None,
        }
    }

    pub fn timeout(after_ms: u64) -> Self {
        Self::with_message(format!("Request timeout after {}ms", after_ms))
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let detail = self
            .text
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("no detail");
        match self.status {
            Some(status) => write!(f, "provider error ({}): {}", status, detail),
            None => write!(f, "provider error: {}", detail),
        }
    }
}

impl std::error::Error for ProviderError {}

#[async_trait]
pub trait BaseEmailProvider: Send + Sync {
    /// One-time setup with the account's public key. Must precede `send`.
    async fn init(&self, public_key: &str) -> Result<(), ProviderError>;

    /// Deliver one templated email.
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &ContactTemplateParams,
    ) -> Result<ProviderResponse, ProviderError>;
}
