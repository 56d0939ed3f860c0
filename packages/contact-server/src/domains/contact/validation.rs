//! Field validation for sanitized contact input.
//!
//! Every rule runs; nothing short-circuits. Each field contributes at most one
//! message (its first violation), so `errors` and `field_errors` stay in step.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

use super::models::{ContactField, SanitizedContactInput};

pub const NAME_MAX_CHARS: usize = 100;
pub const PROJECT_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 5;
pub const MESSAGE_MAX_CHARS: usize = 2000;
pub const EMAIL_LOCAL_MAX_CHARS: usize = 64;
pub const EMAIL_DOMAIN_MAX_CHARS: usize = 255;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

lazy_static! {
    // RFC 5322 simplified: dot-atom local part, hostname labels, at least one dot in the domain
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$"
    ).unwrap();
}

/// Field-level feedback for one input.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub field_errors: BTreeMap<ContactField, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All messages in field order, joined for a single status line.
    pub fn summary(&self) -> String {
        self.errors.join(". ")
    }

    fn reject(&mut self, field: ContactField, message: impl Into<String>) {
        let message = message.into();
        self.errors.push(message.clone());
        self.field_errors.insert(field, message);
    }
}

/// Syntactic email check. Never touches DNS, so a well-formed address for a
/// mailbox that does not exist still passes.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.contains("..") {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || local.chars().count() > EMAIL_LOCAL_MAX_CHARS {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') {
        return false;
    }
    if domain.is_empty() || domain.chars().count() > EMAIL_DOMAIN_MAX_CHARS {
        return false;
    }

    EMAIL_REGEX.is_match(email)
}

/// Decide whether `input` may be submitted.
pub fn validate(input: &SanitizedContactInput) -> ValidationResult {
    let mut result = ValidationResult::default();

    if let Some(message) = check_name(&input.name) {
        result.reject(ContactField::Name, message);
    }
    if let Some(message) = check_email(&input.email) {
        result.reject(ContactField::Email, message);
    }
    if let Some(message) = check_project(&input.project) {
        result.reject(ContactField::Project, message);
    }
    if let Some(message) = check_message(&input.message) {
        result.reject(ContactField::Message, message);
    }

    result
}

fn check_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("Name is required")
    } else if name.chars().count() > NAME_MAX_CHARS {
        Some("Name must be less than 100 characters")
    } else {
        None
    }
}

fn check_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some(INVALID_EMAIL_MESSAGE)
    } else {
        None
    }
}

fn check_project(project: &str) -> Option<&'static str> {
    if project.is_empty() {
        Some("Project/subject is required")
    } else if project.chars().count() > PROJECT_MAX_CHARS {
        Some("Project/subject must be less than 100 characters")
    } else {
        None
    }
}

fn check_message(message: &str) -> Option<&'static str> {
    let length = message.trim().chars().count();
    if message.is_empty() {
        Some("Message is required")
    } else if length < MESSAGE_MIN_CHARS {
        Some("Message must be at least 5 characters long")
    } else if length > MESSAGE_MAX_CHARS {
        Some("Message must be less than 2000 characters")
    } else {
        None
    }
}
