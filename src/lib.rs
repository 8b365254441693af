//! # vilinks
//!
//! A small self-hosted go-links service built with Axum and SQLite: short
//! aliases such as `vi/docs` redirect to long URLs, and every redirect is
//! counted.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity and repository trait
//! - **Application Layer** ([`application`]) - Validation and use cases
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store and repository
//! - **Web Layer** ([`web`]) - HTML pages, forms and redirects
//!
//! ## Quick Start
//!
//! ```bash
//! export VILINKS_DB="$HOME/.vilinks/vilinks.db"   # optional
//! cargo run
//! # then open http://127.0.0.1:8765/
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkInput, LinkService};
    pub use crate::domain::entities::{Link, NewLink, Stats};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{SqliteLinkRepository, Store, StoreOptions};
    pub use crate::state::AppState;
}
