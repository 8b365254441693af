//! Handler for alias redirects.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::found;

/// Page shown for an unknown alias.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub base_prefix: String,
    pub slug: String,
}

/// Redirects an alias to its destination and counts the hit.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// Fixed routes (`/healthz`, `/help`, `/links`, `/static`) always win over this one.
///
/// # Responses
///
/// - **302 Found** with `Location` set to the stored URL, percent-encoded
/// - **404 Not Found** with the not-found page when the alias is unknown
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.resolve(&slug).await? {
        Some(link) => {
            tracing::debug!(slug = %slug, url = %link.url, "Redirecting");
            Ok(found(&redirect_location(&link.url)))
        }
        None => {
            tracing::debug!(slug = %slug, "Unknown alias");
            let page = NotFoundTemplate {
                base_prefix: state.base_prefix.clone(),
                slug,
            };
            Ok((StatusCode::NOT_FOUND, page).into_response())
        }
    }
}

/// Returns the stored URL as a valid `Location` value.
///
/// Printable ASCII is sent as stored. Anything else is re-serialized by the
/// URL parser: non-ASCII paths are percent-encoded, spaces become `%20` and
/// international hosts become punycode.
fn redirect_location(url: &str) -> String {
    if url.bytes().all(|b| b.is_ascii_graphic()) {
        return url.to_string();
    }

    Url::parse(url)
        .map(String::from)
        .unwrap_or_else(|_| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_location_keeps_ascii_urls() {
        assert_eq!(redirect_location("https://example.com"), "https://example.com");
        assert_eq!(
            redirect_location("https://example.com/docs?q=1#top"),
            "https://example.com/docs?q=1#top"
        );
    }

    #[test]
    fn test_redirect_location_encodes_non_ascii() {
        assert_eq!(
            redirect_location("https://example.com/café"),
            "https://example.com/caf%C3%A9"
        );
        assert_eq!(
            redirect_location("https://bücher.example/"),
            "https://xn--bcher-kva.example/"
        );
        assert_eq!(
            redirect_location("https://example.com/a b"),
            "https://example.com/a%20b"
        );
    }
}
