//! Aggregate statistics across all links.

use chrono::{DateTime, Utc};

/// Totals computed in a single read over the `links` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_links: i64,
    pub total_hits: i64,
    /// Most recent `created_at`, or `None` when there are no links.
    pub latest_created: Option<DateTime<Utc>>,
    /// Most recent `last_hit_at`, or `None` when no link was ever followed.
    pub latest_hit: Option<DateTime<Utc>>,
}

impl Stats {
    /// Returns true when the store holds no links.
    pub fn is_empty(&self) -> bool {
        self.total_links == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats_are_empty() {
        let stats = Stats::default();

        assert!(stats.is_empty());
        assert_eq!(stats.total_hits, 0);
        assert!(stats.latest_created.is_none());
        assert!(stats.latest_hit.is_none());
    }
}
