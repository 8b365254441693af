//! Handlers for the link forms (create, update, delete).

use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::services::LinkInput;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{CreateLinkForm, LinkActionForm, MethodOverride};
use crate::web::handlers::found;
use crate::web::handlers::home::render_home_with_errors;
use crate::web::views::FormValues;

/// Creates a link from the listing page form.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Responses
///
/// - **302 Found** to `/` on success
/// - **400 Bad Request** with the listing page, every error message and the
///   submitted (normalized) values when validation fails or the alias is taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateLinkForm>,
) -> Result<Response, AppError> {
    let input = LinkInput::from(form);

    match state.link_service.create_link(input.clone()).await {
        Ok(_) => Ok(found("/")),
        Err(AppError::Validation(errors)) => {
            render_home_with_errors(
                &state,
                StatusCode::BAD_REQUEST,
                errors,
                FormValues::from(input.normalized()),
            )
            .await
        }
        Err(e) => Err(e),
    }
}

/// Updates or deletes a link, depending on the `_method` field.
///
/// # Endpoint
///
/// `POST /links/{slug}`
///
/// # Responses
///
/// - `_method=DELETE`: **302 Found** to `/` (also when the alias is unknown)
/// - `_method=PUT`: **302 Found** to `/`, or **400 Bad Request** with the
///   listing page when the new URL is rejected
/// - anything else, or an unreadable body: **405 Method Not Allowed**
pub async fn link_action_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    form: Result<Form<LinkActionForm>, FormRejection>,
) -> Result<Response, AppError> {
    let form = form.map(|Form(form)| form).unwrap_or_default();

    match form.method_override() {
        Some(MethodOverride::Delete) => {
            state.link_service.delete_link(&slug).await?;
            Ok(found("/"))
        }
        Some(MethodOverride::Put) => {
            match state
                .link_service
                .update_link(&slug, &form.url, &form.description)
                .await
            {
                Ok(_) => Ok(found("/")),
                Err(AppError::Validation(errors)) => {
                    render_home_with_errors(
                        &state,
                        StatusCode::BAD_REQUEST,
                        errors,
                        FormValues::default(),
                    )
                    .await
                }
                Err(e) => Err(e),
            }
        }
        None => Ok(StatusCode::METHOD_NOT_ALLOWED.into_response()),
    }
}
