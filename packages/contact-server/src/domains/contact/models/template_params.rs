use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::SanitizedContactInput;

/// Payload handed to the email template.
///
/// Key names are part of the template contract and must not change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactTemplateParams {
    pub name: String,
    pub email: String,
    pub project: String,
    pub message: String,
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub to_name: String,
    pub timestamp: String,
}

impl ContactTemplateParams {
    pub fn build(input: &SanitizedContactInput, to_name: &str, sent_at: DateTime<Utc>) -> Self {
        Self {
            name: input.name.clone(),
            email: input.email.clone(),
            project: input.project.clone(),
            message: input.message.clone(),
            from_name: input.name.clone(),
            from_email: input.email.clone(),
            reply_to: input.email.clone(),
            to_name: to_name.to_string(),
            timestamp: sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
