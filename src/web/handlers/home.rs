//! Listing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::views::{FormValues, LinkView, StatsView};

/// Template for the listing page.
///
/// Renders `templates/home.html` with:
/// - Totals and latest activity
/// - The create form (pre-filled after a rejected submission)
/// - Every link with its edit and delete forms
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub base_prefix: String,
    pub links: Vec<LinkView>,
    pub stats: StatsView,
    pub errors: Vec<String>,
    pub form: FormValues,
}

/// Renders the listing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<HomeTemplate, AppError> {
    build_home(&state, Vec::new(), FormValues::default()).await
}

/// Re-renders the listing page with error messages and the given status.
pub(crate) async fn render_home_with_errors(
    state: &AppState,
    status: StatusCode,
    errors: Vec<String>,
    form: FormValues,
) -> Result<Response, AppError> {
    let page = build_home(state, errors, form).await?;
    Ok((status, page).into_response())
}

async fn build_home(
    state: &AppState,
    errors: Vec<String>,
    form: FormValues,
) -> Result<HomeTemplate, AppError> {
    let overview = state.link_service.overview().await?;

    Ok(HomeTemplate {
        links: overview
            .links
            .iter()
            .map(|link| LinkView::new(link, &state.base_prefix))
            .collect(),
        stats: StatsView::from(&overview.stats),
        base_prefix: state.base_prefix.clone(),
        errors,
        form,
    })
}
