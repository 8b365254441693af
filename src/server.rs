//! HTTP server initialization and runtime setup.
//!
//! Opens the store, applies the schema and runs the Axum server until a
//! shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::persistence::Store;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite database file and connection pool
/// - Schema (idempotent)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened or migrated
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Store::open(&config.store_options())
        .await
        .with_context(|| format!("Failed to open {}", config.database_path.display()))?;
    store
        .initialize()
        .await
        .context("Failed to initialize schema")?;
    tracing::info!("Database ready");

    let state = AppState::new(store.clone(), config.base_prefix());
    let app = app_router(state);

    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {listen_addr}"))?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
