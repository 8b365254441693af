//! Display models handed to templates.
//!
//! Templates only print strings; formatting decisions live here.

use chrono::{DateTime, Utc};

use crate::application::services::LinkInput;
use crate::domain::entities::{Link, Stats};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";
const NEVER: &str = "never";

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

fn format_optional(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(format_timestamp).unwrap_or_else(|| NEVER.to_string())
}

/// One row of the listing table.
#[derive(Debug, Clone)]
pub struct LinkView {
    pub slug: String,
    /// Alias as users type it, e.g. `vi/docs`.
    pub short: String,
    pub url: String,
    pub description: String,
    pub hit_count: i64,
    pub created_at: String,
    pub updated_at: String,
    pub last_hit_at: String,
    pub edited: bool,
    /// Never followed; the row is dimmed.
    pub unused: bool,
}

impl LinkView {
    pub fn new(link: &Link, base_prefix: &str) -> Self {
        Self {
            slug: link.slug.clone(),
            short: format!("{}{}", base_prefix, link.slug),
            url: link.url.clone(),
            description: link.description.clone(),
            hit_count: link.hit_count,
            created_at: format_timestamp(&link.created_at),
            updated_at: format_timestamp(&link.updated_at),
            last_hit_at: format_optional(link.last_hit_at.as_ref()),
            edited: link.was_edited(),
            unused: link.is_unused(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatsView {
    pub total_links: i64,
    pub total_hits: i64,
    pub latest_created: String,
    pub latest_hit: String,
    /// No links at all; the page skips the totals.
    pub empty: bool,
}

impl From<&Stats> for StatsView {
    fn from(stats: &Stats) -> Self {
        Self {
            total_links: stats.total_links,
            total_hits: stats.total_hits,
            latest_created: format_optional(stats.latest_created.as_ref()),
            latest_hit: format_optional(stats.latest_hit.as_ref()),
            empty: stats.is_empty(),
        }
    }
}

/// Values echoed back into the create form after a rejected submission.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub slug: String,
    pub url: String,
    pub description: String,
}

impl From<LinkInput> for FormValues {
    fn from(input: LinkInput) -> Self {
        Self {
            slug: input.slug,
            url: input.url,
            description: input.description,
        }
    }
}
