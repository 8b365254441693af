//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Link, LinkChanges, NewLink, Stats};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_insert_error};
use crate::infrastructure::persistence::Store;

const LINK_COLUMNS: &str =
    "slug, url, description, hit_count, created_at, updated_at, last_hit_at";

/// A `links` row as stored. Nullable columns with defaults stay optional here
/// and are resolved when converting into [`Link`].
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    slug: String,
    url: String,
    description: Option<String>,
    hit_count: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    last_hit_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.slug,
            row.url,
            row.description.unwrap_or_default(),
            row.hit_count.unwrap_or(0),
            row.created_at,
            row.updated_at,
            row.last_hit_at,
        )
    }
}

#[derive(Debug, sqlx::FromRow)]
struct StatsRow {
    total_links: i64,
    total_hits: i64,
    latest_created: Option<DateTime<Utc>>,
    latest_hit: Option<DateTime<Utc>>,
}

impl From<StatsRow> for Stats {
    fn from(row: StatsRow) -> Self {
        Stats {
            total_links: row.total_links,
            total_hits: row.total_hits,
            latest_created: row.latest_created,
            latest_hit: row.latest_hit,
        }
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Timestamps come from the application clock and are bound as parameters,
/// so every stored value shares one RFC 3339 format and sorts correctly as
/// text.
#[derive(Debug, Clone)]
pub struct SqliteLinkRepository {
    store: Store,
}

impl SqliteLinkRepository {
    /// Creates a new repository on top of an opened store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let mut conn = self.store.connection().await?;

        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links ORDER BY created_at DESC, rowid DESC"
        ))
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn get(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let mut conn = self.store.connection().await?;

        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE slug = ?"
        ))
        .bind(slug)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(Link::from))
    }

    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut conn = self.store.connection().await?;
        let now = Utc::now();

        let row = sqlx::query_as::<_, LinkRow>(&format!(
            r#"
            INSERT INTO links (slug, url, description, hit_count, created_at, updated_at)
            VALUES (?, ?, ?, 0, ?, ?)
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(&new_link.slug)
        .bind(&new_link.url)
        .bind(&new_link.description)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| map_insert_error(e, &new_link.slug))?;

        Ok(row.into())
    }

    async fn update(&self, slug: &str, changes: LinkChanges) -> Result<bool, AppError> {
        let mut conn = self.store.connection().await?;

        let result = sqlx::query(
            "UPDATE links SET url = ?, description = ?, updated_at = ? WHERE slug = ?",
        )
        .bind(&changes.url)
        .bind(&changes.description)
        .bind(Utc::now())
        .bind(slug)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        let mut conn = self.store.connection().await?;

        let result = sqlx::query("DELETE FROM links WHERE slug = ?")
            .bind(slug)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_hit(&self, slug: &str) -> Result<(), AppError> {
        let mut conn = self.store.connection().await?;

        // Single statement: concurrent redirects never lose an increment.
        sqlx::query(
            r#"
            UPDATE links
            SET hit_count = COALESCE(hit_count, 0) + 1, last_hit_at = ?
            WHERE slug = ?
            "#,
        )
        .bind(Utc::now())
        .bind(slug)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    async fn stats(&self) -> Result<Stats, AppError> {
        let mut conn = self.store.connection().await?;

        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT
                COUNT(*) AS total_links,
                COALESCE(SUM(hit_count), 0) AS total_hits,
                MAX(created_at) AS latest_created,
                MAX(last_hit_at) AS latest_hit
            FROM links
            "#,
        )
        .fetch_one(&mut *conn)
        .await?;

        Ok(row.into())
    }
}
