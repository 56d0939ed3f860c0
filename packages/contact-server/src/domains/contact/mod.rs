//! Contact domain - relays portfolio contact form messages by email
//!
//! Pipeline per submission:
//!   readiness check → provider init (memoized) → sanitize → validate → send (raced
//!   against a timeout) → classify failures
//!
//! Responsibilities:
//! - Field validation with user-facing, per-field messages
//! - Mapping opaque provider errors onto a closed `ErrorKind` taxonomy
//! - Keeping raw provider detail out of anything shown to visitors

pub mod actions;
pub mod classifier;
pub mod models;
pub mod validation;

pub use actions::{submit_contact, test_configuration};
pub use classifier::{classify, ErrorKind};
pub use models::{ContactField, ContactFormInput, SanitizedContactInput, SubmissionOutcome};
pub use validation::{is_valid_email, validate, ValidationResult};
