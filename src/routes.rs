//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Listing page
//! - `GET  /healthz`      - Liveness probe
//! - `GET  /help`         - Help page
//! - `POST /links[/…]`    - Link forms
//! - `/static/*`          - Static assets
//! - `GET  /{slug}`       - Alias redirect (lowest priority)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::middleware::tracing;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with all routes and tracing, without path normalization.
///
/// Integration tests drive this directly.
pub fn router(state: AppState) -> Router {
    web::routes::routes()
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed before
/// routing, so `/help/` reaches the help page.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
