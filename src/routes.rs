//! Top-level router combining wiki pages, health check and static assets.
//!
//! # Route Structure
//!
//! - Wiki pages, see [`crate::web::routes::ROUTES`]
//! - `GET  /health`  - Health check (JSON)
//! - `/static/*`     - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/random/` serves the
/// same page as `/random`.
pub fn app_router(state: AppState, static_dir: &Path) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
