//! Link entity representing an alias-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored alias with its destination and usage counters.
///
/// `slug` and `created_at` never change after creation. `url`, `description`
/// and `updated_at` change on update; `hit_count` and `last_hit_at` change
/// only when a redirect is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub slug: String,
    pub url: String,
    pub description: String,
    pub hit_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_hit_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        slug: String,
        url: String,
        description: String,
        hit_count: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        last_hit_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            slug,
            url,
            description,
            hit_count,
            created_at,
            updated_at,
            last_hit_at,
        }
    }

    /// Returns true if the link has never been followed.
    pub fn is_unused(&self) -> bool {
        self.last_hit_at.is_none()
    }

    /// Returns true if the link was edited after it was created.
    pub fn was_edited(&self) -> bool {
        self.updated_at > self.created_at
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub slug: String,
    pub url: String,
    pub description: String,
}

/// Replacement values for an existing link.
///
/// Only the destination and description are editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkChanges {
    pub url: String,
    pub description: String,
}
