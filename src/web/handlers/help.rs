//! Help page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::state::AppState;
use crate::utils::validation::RESERVED_SLUGS;

/// Template for the help page.
///
/// Explains alias rules and lists the reserved words.
#[derive(Template, WebTemplate)]
#[template(path = "help.html")]
pub struct HelpTemplate {
    pub base_prefix: String,
    pub reserved: Vec<&'static str>,
}

/// Renders the help page.
///
/// # Endpoint
///
/// `GET /help`
pub async fn help_handler(State(state): State<AppState>) -> HelpTemplate {
    HelpTemplate {
        base_prefix: state.base_prefix.clone(),
        reserved: RESERVED_SLUGS.to_vec(),
    }
}
