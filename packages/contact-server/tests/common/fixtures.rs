//! Form inputs shared across tests.

use contact_core::domains::contact::ContactFormInput;

/// The canonical valid submission
pub fn valid_form() -> ContactFormInput {
    ContactFormInput::new("John Doe", "john@example.com", "Test Project", "Hello there")
}

/// Every field empty
pub fn empty_form() -> ContactFormInput {
    ContactFormInput::new("", "", "", "")
}
