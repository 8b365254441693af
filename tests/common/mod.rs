#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use sqlx::SqlitePool;
use vilinks::infrastructure::persistence::{SqliteLinkRepository, Store};
use vilinks::routes::router;
use vilinks::state::AppState;

pub const BASE_PREFIX: &str = "vi/";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Store::from_pool(pool), BASE_PREFIX)
}

pub fn create_test_repository(pool: SqlitePool) -> SqliteLinkRepository {
    SqliteLinkRepository::new(Store::from_pool(pool))
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

/// Inserts a row with application-style RFC 3339 timestamps, so it sorts
/// consistently with rows written through the repository.
pub async fn create_test_link(pool: &SqlitePool, slug: &str, url: &str) {
    let now = Utc::now();
    sqlx::query(
        "INSERT INTO links (slug, url, description, created_at, updated_at) VALUES (?, ?, '', ?, ?)",
    )
    .bind(slug)
    .bind(url)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn hit_count(pool: &SqlitePool, slug: &str) -> i64 {
    sqlx::query_scalar("SELECT hit_count FROM links WHERE slug = ?")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
