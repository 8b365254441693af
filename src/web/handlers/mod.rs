//! HTTP handlers for the web UI and redirects.

mod health;
mod help;
mod home;
mod links;
mod redirect;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub use health::health_handler;
pub use help::{HelpTemplate, help_handler};
pub use home::{HomeTemplate, home_handler};
pub use links::{create_link_handler, link_action_handler};
pub use redirect::{NotFoundTemplate, redirect_handler};

/// `302 Found` to `location`.
///
/// Axum's [`axum::response::Redirect`] only offers 303, 307 and 308.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
