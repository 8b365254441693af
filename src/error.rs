//! Application error type shared by the service, persistence and web layers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or more user-facing messages, in the order they were detected.
    #[error("validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    #[error("link '{0}' not found")]
    NotFound(String),

    #[error("link '{0}' already exists")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns the user-facing messages carried by this error.
    ///
    /// Store failures are reported with a generic message; their details only
    /// go to the log.
    pub fn messages(&self) -> Vec<String> {
        match self {
            AppError::Validation(errors) => errors.clone(),
            AppError::NotFound(slug) => vec![format!("Alias '{slug}' not found.")],
            AppError::Conflict(slug) => vec![already_exists_message(slug)],
            _ => vec!["Internal server error".to_string()],
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, self.messages().join("\n")).into_response()
    }
}

/// Message appended to the validation list when a slug is already taken.
pub fn already_exists_message(slug: &str) -> String {
    format!("Alias '{slug}' already exists.")
}

/// Maps an insert failure to [`AppError::Conflict`] when it violates the
/// primary key on `slug`.
pub fn map_insert_error(e: sqlx::Error, slug: &str) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::Conflict(slug.to_string());
    }

    AppError::Database(e)
}
