pub mod form;
pub mod outcome;
pub mod template_params;

pub use form::*;
pub use outcome::*;
pub use template_params::*;
