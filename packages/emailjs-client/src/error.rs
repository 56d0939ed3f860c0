//! Error types for the EmailJS client.

use thiserror::Error;

/// Result type for EmailJS client operations.
pub type Result<T> = std::result::Result<T, EmailJsError>;

/// EmailJS client errors.
#[derive(Debug, Error)]
pub enum EmailJsError {
    /// Client misconfigured (empty public key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// `send` was called before `init` stored a public key
    #[error("EmailJS public key not initialized; call init first")]
    NotInitialized,

    /// Transport failure (connection refused, DNS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the EmailJS API
    #[error("API error ({status}): {text}")]
    Api { status: u16, text: String },
}
