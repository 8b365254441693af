//! Web UI and redirect route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_link_handler, health_handler, help_handler, home_handler, link_action_handler,
    redirect_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// All application routes.
///
/// # Endpoints
///
/// - `GET  /`             - Listing with stats and forms
/// - `GET  /healthz`      - Liveness probe, plain `ok`
/// - `GET  /help`         - Help page
/// - `POST /links`        - Create a link
/// - `POST /links/{slug}` - Update (`_method=PUT`) or delete (`_method=DELETE`)
/// - `GET  /{slug}`       - Redirect to the stored URL
///
/// Static segments always match before `/{slug}`, so an alias can never hide
/// a fixed route; the reserved-word check at creation keeps such aliases from
/// being stored at all.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/healthz", get(health_handler))
        .route("/help", get(help_handler))
        .route("/links", post(create_link_handler))
        .route("/links/{slug}", post(link_action_handler))
        .route("/{slug}", get(redirect_handler))
}
