// Contact Relay - Core
//
// Relays portfolio contact form submissions to a transactional email provider
// (EmailJS). Validation, provider error classification and the submission
// pipeline live in domains/contact; provider plumbing lives in kernel/.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
