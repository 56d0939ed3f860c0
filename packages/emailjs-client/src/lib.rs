//! Pure EmailJS REST API client.
//!
//! A minimal client for the EmailJS transactional email API. Mirrors the
//! browser SDK's two-step shape: `init` stores the account's public key once,
//! then `send` delivers a template with arbitrary serializable parameters.
//!
//! # Example
//!
//! ```rust,ignore
//! use emailjs_client::EmailJsClient;
//!
//! let client = EmailJsClient::new();
//! client.init("your-public-key")?;
//!
//! let response = client
//!     .send("service_id", "template_id", &serde_json::json!({ "name": "Ada" }))
//!     .await?;
//! println!("{} {}", response.status, response.text);
//! ```

pub mod error;
pub mod types;

pub use error::{EmailJsError, Result};
pub use types::{EmailJsResponse, SendRequest};

use serde::Serialize;
use std::sync::OnceLock;

const BASE_URL: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "/api/v1.0/email/send";

pub struct EmailJsClient {
    client: reqwest::Client,
    base_url: String,
    public_key: OnceLock<String>,
    access_token: Option<String>,
}

impl EmailJsClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            public_key: OnceLock::new(),
            access_token: None,
        }
    }

    /// Set a custom base URL (for proxies or local stubs).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Attach a private access token, required when the account enforces
    /// strict mode for non-browser callers.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store the public key used for every subsequent send.
    ///
    /// Idempotent: the first non-empty key wins and later calls are no-ops.
    pub fn init(&self, public_key: &str) -> Result<()> {
        let public_key = public_key.trim();
        if public_key.is_empty() {
            return Err(EmailJsError::Config("public key is empty".into()));
        }

        if self.public_key.set(public_key.to_string()).is_err() {
            tracing::debug!("EmailJS client already initialized, keeping existing key");
        }
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.public_key.get().is_some()
    }

    /// Send a template email.
    pub async fn send<P: Serialize>(
        &self,
        service_id: &str,
        template_id: &str,
        template_params: &P,
    ) -> Result<EmailJsResponse> {
        let public_key = self.public_key.get().ok_or(EmailJsError::NotInitialized)?;

        let body = SendRequest {
            service_id,
            template_id,
            user_id: public_key,
            template_params,
            access_token: self.access_token.as_deref(),
        };

        let url = format!("{}{}", self.base_url, SEND_PATH);
        tracing::debug!(service_id, template_id, "Sending EmailJS template");

        let resp = self.client.post(&url).json(&body).send().await?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(EmailJsError::Api {
                status: status.as_u16(),
                text,
            });
        }

        Ok(EmailJsResponse {
            status: status.as_u16(),
            text,
        })
    }
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self::new()
    }
}
