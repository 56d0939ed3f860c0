use serde::Serialize;
use std::collections::BTreeMap;

use super::ContactField;
use crate::domains::contact::classifier::ErrorKind;
use crate::kernel::ProviderResponse;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Result of one submission attempt. Built once, never mutated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Success {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        provider_response: Option<ProviderResponse>,
    },
    Failure {
        message: String,
        error_kind: ErrorKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        field_errors: Option<BTreeMap<ContactField, String>>,
    },
}

impl SubmissionOutcome {
    pub fn success(provider_response: ProviderResponse) -> Self {
        Self::Success {
            message: SUCCESS_MESSAGE.to_string(),
            provider_response: Some(provider_response),
        }
    }

    /// Failure carrying the fixed user-facing message for `kind`.
    pub fn failure(kind: ErrorKind) -> Self {
        Self::Failure {
            message: kind.user_message().to_string(),
            error_kind: kind,
            field_errors: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error_kind, .. } => Some(*error_kind),
        }
    }

    pub fn field_errors(&self) -> Option<&BTreeMap<ContactField, String>> {
        match self {
            Self::Failure { field_errors, .. } => field_errors.as_ref(),
            Self::Success { .. } => None,
        }
    }
}
