//! HTTP server initialization and runtime setup.
//!
//! Opens the entry store, wires the service and serves the Axum router until
//! Ctrl-C.

use crate::application::services::EntryService;
use crate::config::Config;
use crate::infrastructure::markdown::PulldownRenderer;
use crate::infrastructure::persistence::FsEntryRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - File-backed entry store (directory created if missing)
/// - Markdown renderer
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The entries directory cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = FsEntryRepository::open(&config.entries_dir)
        .await
        .context("Failed to open entries directory")?;

    let entry_service = Arc::new(EntryService::new(
        Arc::new(repository),
        Arc::new(PulldownRenderer::new()),
    ));

    let state = AppState::new(entry_service);

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
