//! Test harness wiring ServerDeps to a MockEmailProvider.

use contact_core::config::ServiceConfig;
use contact_core::kernel::{MockEmailProvider, ServerDeps, TestDependencies};
use std::sync::Arc;

/// Initialize tracing once per test binary.
/// Run tests with: RUST_LOG=debug cargo test -- --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Configured deps around the given mock
pub fn deps_with(provider: MockEmailProvider) -> (ServerDeps, Arc<MockEmailProvider>) {
    init_tracing();
    TestDependencies::new()
        .with_provider(provider)
        .into_server_deps()
}

/// Deps with the given config (configured or not) around the given mock
pub fn deps_with_config(
    provider: MockEmailProvider,
    config: ServiceConfig,
) -> (ServerDeps, Arc<MockEmailProvider>) {
    init_tracing();
    TestDependencies::new()
        .with_provider(provider)
        .with_config(config)
        .into_server_deps()
}
