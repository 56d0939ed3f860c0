//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod provider_init;
pub mod test_dependencies;
pub mod traits;

pub use deps::{EmailJsProvider, ServerDeps};
pub use provider_init::ProviderInit;
pub use test_dependencies::{
    configured_service, MockEmailProvider, SendBehavior, SendCallArgs, TestDependencies,
};
pub use traits::*;
