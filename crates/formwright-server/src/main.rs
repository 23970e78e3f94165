//! Formwright HTTP service
//!
//! Rust/Axum server for natural-language form generation.

use anyhow::Context;
use formwright_server::{AppState, ServerConfig, build_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load().context("failed to load configuration")?;
    tracing::info!(
        model = %config.completion.model,
        base_url = %config.completion.base_url,
        api_key_set = config.completion.has_api_key(),
        "configuration loaded"
    );
    if !config.completion.has_api_key() {
        tracing::warn!("no completion API key configured; generation requests will fail with 401");
    }

    let state = AppState::from_config(&config).context("failed to build completion backend")?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("Formwright listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
