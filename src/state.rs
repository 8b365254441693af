//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::{SqliteLinkRepository, Store};

/// Link service backed by the SQLite repository.
pub type SqliteLinkService = LinkService<SqliteLinkRepository>;

/// Per-process state. Holds no mutable data; everything lives in the store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<SqliteLinkService>,
    /// Prefix shown before each alias on rendered pages, e.g. `vi/`.
    pub base_prefix: String,
}

impl AppState {
    pub fn new(store: Store, base_prefix: impl Into<String>) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(store));

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            base_prefix: base_prefix.into(),
        }
    }
}
