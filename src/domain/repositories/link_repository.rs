//! Repository trait for link data access.

use crate::domain::entities::{Link, LinkChanges, NewLink, Stats};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing links.
///
/// Every operation is a single atomic statement against the store and holds a
/// connection only for the duration of the call.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Lists every link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Finds a link by its slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn get(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Inserts a new link with zero hits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists.
    /// Returns [`AppError::Database`] on other database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Replaces the url and description of a link and refreshes `updated_at`.
    ///
    /// Returns `Ok(false)` when no link has this slug; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn update(&self, slug: &str, changes: LinkChanges) -> Result<bool, AppError>;

    /// Permanently removes a link.
    ///
    /// Returns `Ok(false)` when no link has this slug; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn delete(&self, slug: &str) -> Result<bool, AppError>;

    /// Increments `hit_count` and stamps `last_hit_at` in one statement.
    ///
    /// A missing slug is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn record_hit(&self, slug: &str) -> Result<(), AppError>;

    /// Computes aggregate totals in a single query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn stats(&self) -> Result<Stats, AppError>;
}
