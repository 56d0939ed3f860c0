use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use serde::Serialize;
use secrecy::SecretString;
use std::env;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_RECIPIENT_NAME: &str = "Sadique Hasan";
pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com";

/// Email provider identity and submission tuning.
///
/// Missing identifiers never fail startup; they only leave the service
/// unconfigured, which `submit` reports as a `SERVICE_CONFIGURATION` failure.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<SecretString>,
    pub timeout_ms: u64,
    pub debug: bool,
    pub recipient_name: String,
}

impl ServiceConfig {
    /// All three provider identifiers are present and non-empty.
    pub fn is_configured(&self) -> bool {
        !self.service_id.trim().is_empty()
            && !self.template_id.trim().is_empty()
            && !self.public_key.trim().is_empty()
    }

    pub fn status(&self) -> ConfigStatus {
        ConfigStatus {
            configured: self.is_configured(),
            has_service_id: !self.service_id.trim().is_empty(),
            has_template_id: !self.template_id.trim().is_empty(),
            has_public_key: !self.public_key.trim().is_empty(),
            timeout_ms: self.timeout_ms,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            private_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            debug: false,
            recipient_name: DEFAULT_RECIPIENT_NAME.to_string(),
        }
    }
}

/// Readiness report that never exposes the identifiers themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigStatus {
    pub configured: bool,
    pub has_service_id: bool,
    pub has_template_id: bool,
    pub has_public_key: bool,
    pub timeout_ms: u64,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origin: Option<String>,
    pub emailjs_api_url: String,
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_ms = match non_empty("CONTACT_TIMEOUT_MS") {
            Some(raw) => {
                let parsed: u64 = raw
                    .trim()
                    .parse()
                    .context("CONTACT_TIMEOUT_MS must be a whole number of milliseconds")?;
                if parsed == 0 {
                    bail!("CONTACT_TIMEOUT_MS must be greater than zero");
                }
                parsed
            }
            None => DEFAULT_TIMEOUT_MS,
        };

        let debug = match non_empty("CONTACT_DEBUG") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("CONTACT_DEBUG must be a boolean, got {:?}", raw))?,
            None => false,
        };

        Ok(Self {
            port: non_empty("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .trim()
                .parse()
                .context("PORT must be a valid number")?,
            allowed_origin: non_empty("CONTACT_ALLOWED_ORIGIN"),
            emailjs_api_url: non_empty("EMAILJS_API_URL")
                .unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.to_string()),
            service: ServiceConfig {
                service_id: lookup("EMAILJS_SERVICE_ID").unwrap_or_default().trim().to_string(),
                template_id: lookup("EMAILJS_TEMPLATE_ID").unwrap_or_default().trim().to_string(),
                public_key: lookup("EMAILJS_PUBLIC_KEY").unwrap_or_default().trim().to_string(),
                private_key: non_empty("EMAILJS_PRIVATE_KEY").map(SecretString::from),
                timeout_ms,
                debug,
                recipient_name: non_empty("CONTACT_RECIPIENT_NAME")
                    .map(|v| v.trim().to_string())
                    .unwrap_or_else(|| DEFAULT_RECIPIENT_NAME.to_string()),
            },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
