//! HTTP server initialization and runtime setup.
//!
//! Wires the repository, code generator and shortener service together and
//! runs the Axum server.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryShortLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state from configuration.
///
/// Creates exactly one repository; it lives as long as the returned state.
pub fn build_state(config: &Config) -> AppState {
    let repository = Arc::new(InMemoryShortLinkRepository::new());
    let generator = config.code_strategy.build(config.code_length);

    let shortener = ShortenerService::new(repository, generator, config.shortener_settings());

    AppState::new(Arc::new(shortener))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    tracing::info!(strategy = %config.code_strategy, "Shortener initialized");

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
