//! Liveness endpoint.

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// Does not touch the database; use `admin db check` for that.
pub async fn health_handler() -> &'static str {
    "ok"
}
