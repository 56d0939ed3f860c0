//! Provider error classification.
//!
//! EmailJS reports failures as a status code plus free text, so the mapping
//! onto `ErrorKind` is a keyword heuristic. Rules are checked in table order
//! and the first match wins; later rules are narrower fallbacks.

use serde::{Deserialize, Serialize};

use crate::kernel::ProviderError;

/// Closed set of failure classes shown to visitors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NetworkError,
    InvalidCredentials,
    RateLimit,
    ValidationError,
    ServerError,
    TimeoutError,
    TemplateError,
    DomainRestriction,
    ServiceConfiguration,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 9] = [
        ErrorKind::NetworkError,
        ErrorKind::InvalidCredentials,
        ErrorKind::RateLimit,
        ErrorKind::ValidationError,
        ErrorKind::ServerError,
        ErrorKind::TimeoutError,
        ErrorKind::TemplateError,
        ErrorKind::DomainRestriction,
        ErrorKind::ServiceConfiguration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NetworkError => "NETWORK_ERROR",
            ErrorKind::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorKind::RateLimit => "RATE_LIMIT",
            ErrorKind::ValidationError => "VALIDATION_ERROR",
            ErrorKind::ServerError => "SERVER_ERROR",
            ErrorKind::TimeoutError => "TIMEOUT_ERROR",
            ErrorKind::TemplateError => "TEMPLATE_ERROR",
            ErrorKind::DomainRestriction => "DOMAIN_RESTRICTION",
            ErrorKind::ServiceConfiguration => "SERVICE_CONFIGURATION",
        }
    }

    /// Fixed, user-safe message. Never includes provider text or status codes.
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorKind::NetworkError => {
                "Unable to reach the email service. Please check your internet connection and try again."
            }
            ErrorKind::InvalidCredentials => {
                "The email service rejected the site's credentials. Please reach out by email instead."
            }
            ErrorKind::RateLimit => {
                "Too many messages have been sent recently. Please wait a few minutes and try again."
            }
            ErrorKind::ValidationError => {
                "Some of the information provided is invalid. Please review the form and try again."
            }
            ErrorKind::ServerError => {
                "Something went wrong while sending your message. Please try again later."
            }
            ErrorKind::TimeoutError => {
                "Sending your message took too long. Please try again."
            }
            ErrorKind::TemplateError => {
                "Your message could not be formatted for delivery. Please reach out by email instead."
            }
            ErrorKind::DomainRestriction => {
                "Messages cannot be sent from this website right now. Please reach out by email instead."
            }
            ErrorKind::ServiceConfiguration => {
                "The contact form is not available at the moment. Please reach out by email instead."
            }
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized view of a provider error that rules inspect.
pub struct ErrorSignal {
    status: Option<u16>,
    haystack: String,
}

impl ErrorSignal {
    pub fn from_error(error: &ProviderError) -> Self {
        let haystack = [error.message.as_deref(), error.text.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Self {
            status: error.status,
            haystack,
        }
    }

    fn mentions(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.haystack.contains(k))
    }

    fn status_is(&self, code: u16) -> bool {
        self.status == Some(code)
    }

    fn status_in(&self, range: std::ops::Range<u16>) -> bool {
        self.status.is_some_and(|s| range.contains(&s))
    }
}

/// One entry of the precedence table.
pub struct ClassifierRule {
    pub kind: ErrorKind,
    pub matches: fn(&ErrorSignal) -> bool,
}

/// Precedence order. `classify` falls back to `ServerError` when nothing matches.
pub static RULES: &[ClassifierRule] = &[
    ClassifierRule {
        kind: ErrorKind::TemplateError,
        matches: |s| s.mentions(&["template", "field name", "dynamic variable"]),
    },
    ClassifierRule {
        kind: ErrorKind::DomainRestriction,
        matches: |s| s.status_is(403) || s.mentions(&["domain", "origin", "cors"]),
    },
    ClassifierRule {
        kind: ErrorKind::ServiceConfiguration,
        matches: |s| s.mentions(&["service", "configuration", "key"]),
    },
    ClassifierRule {
        kind: ErrorKind::NetworkError,
        matches: |s| s.status_is(0) || s.mentions(&["network", "fetch", "connection"]),
    },
    ClassifierRule {
        kind: ErrorKind::RateLimit,
        matches: |s| s.status_is(429) || s.mentions(&["rate", "limit"]),
    },
    ClassifierRule {
        kind: ErrorKind::InvalidCredentials,
        matches: |s| s.status_is(401) || s.mentions(&["unauthorized", "forbidden"]),
    },
    ClassifierRule {
        kind: ErrorKind::TimeoutError,
        matches: |s| s.mentions(&["timeout", "timed out", "abort"]),
    },
    ClassifierRule {
        kind: ErrorKind::ServerError,
        matches: |s| s.status.is_some_and(|code| code >= 500),
    },
    ClassifierRule {
        kind: ErrorKind::ValidationError,
        matches: |s| s.status_in(400..500),
    },
];

pub fn classify(error: &ProviderError) -> ErrorKind {
    let signal = ErrorSignal::from_error(error);
    RULES
        .iter()
        .find(|rule| (rule.matches)(&signal))
        .map(|rule| rule.kind)
        .unwrap_or(ErrorKind::ServerError)
}
