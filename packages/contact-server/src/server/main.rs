// Main entry point for the contact relay server

use anyhow::{Context, Result};
use contact_core::{kernel::ServerDeps, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the debug flag can raise log verbosity
    let config = Config::from_env().context("Failed to load configuration")?;

    let default_filter = if config.service.debug {
        "info,contact_core=debug,emailjs_client=debug"
    } else {
        "info"
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting contact relay");

    let status = config.service.status();
    if status.configured {
        tracing::info!(timeout_ms = status.timeout_ms, "Email provider configured");
    } else {
        tracing::warn!(
            has_service_id = status.has_service_id,
            has_template_id = status.has_template_id,
            has_public_key = status.has_public_key,
            "Email provider not configured; submissions will be refused"
        );
    }

    let deps = ServerDeps::from_config(&config);
    let app = build_app(deps, config.allowed_origin.as_deref());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
