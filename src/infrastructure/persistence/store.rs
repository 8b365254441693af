//! SQLite database file, schema bootstrap and connection settings.

use sqlx::migrate::Migrator;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::Sqlite;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::AppError;

/// Embedded schema migrations. Every statement uses `IF NOT EXISTS`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Settings used to open a [`Store`].
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub path: PathBuf,
    pub max_connections: u32,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl StoreOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// Handle to the on-disk link database.
///
/// Connections run in WAL journal mode with `synchronous = NORMAL`: readers
/// proceed while a writer commits, and a crash may lose only the most recent
/// transactions.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (creating if needed) the database file and its parent directory.
    ///
    /// The schema is not touched; call [`Store::initialize`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the directory cannot be created and
    /// [`AppError::Database`] if the file cannot be opened.
    pub async fn open(options: &StoreOptions) -> Result<Self, AppError> {
        if let Some(parent) = options.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let connect_options = SqliteConnectOptions::new()
            .filename(&options.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(options.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections)
            .connect_with(connect_options)
            .await?;

        tracing::debug!(path = %options.path.display(), "Opened database");

        Ok(Self { pool })
    }

    /// Wraps an existing pool, e.g. one provided by `#[sqlx::test]`.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `links` table and its indexes if they are missing.
    ///
    /// Safe to call on every start.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Migration`] if a migration fails to apply.
    pub async fn initialize(&self) -> Result<(), AppError> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    /// Checks out a connection for a single operation.
    ///
    /// The connection goes back to the pool when the handle is dropped,
    /// including on early returns and errors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if no connection can be acquired.
    pub async fn connection(&self) -> Result<PoolConnection<Sqlite>, AppError> {
        Ok(self.pool.acquire().await?)
    }

    /// Runs a trivial query to confirm the database answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.connection().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    /// Returns the journal mode the connections actually run in.
    pub async fn journal_mode(&self) -> Result<String, AppError> {
        let mut conn = self.connection().await?;
        let mode: String = sqlx::query_scalar("PRAGMA journal_mode")
            .fetch_one(&mut *conn)
            .await?;
        Ok(mode)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes all pooled connections, checkpointing the WAL.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Default database location: `~/.vilinks/vilinks.db`.
pub fn default_database_path() -> PathBuf {
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".vilinks").join("vilinks.db")
}

/// Returns true if `path` points at an existing database file.
pub fn database_exists(path: &Path) -> bool {
    path.is_file()
}
