//! SQLite persistence.
//!
//! [`Store`] owns the database file: it creates the parent directory, opens a
//! pool in WAL mode with `synchronous = NORMAL`, and applies the embedded
//! migrations from `migrations/`. Repositories borrow one pooled connection
//! per operation.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage, hit counting and statistics

pub mod sqlite_link_repository;
pub mod store;

pub use sqlite_link_repository::SqliteLinkRepository;
pub use store::{MIGRATOR, Store, StoreOptions, database_exists, default_database_path};
