//! Contact domain actions - business logic functions
//!
//! Actions are async functions called directly from HTTP handlers.

mod submit_contact;
mod test_configuration;

pub use submit_contact::submit_contact;
pub use test_configuration::test_configuration;
