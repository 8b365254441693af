mod common;

use chrono::Utc;
use sqlx::SqlitePool;
use std::time::Duration;
use vilinks::domain::entities::{LinkChanges, NewLink};
use vilinks::domain::repositories::LinkRepository;
use vilinks::error::AppError;

fn new_link(slug: &str, url: &str) -> NewLink {
    NewLink {
        slug: slug.to_string(),
        url: url.to_string(),
        description: String::new(),
    }
}

#[sqlx::test]
async fn test_create_link(pool: SqlitePool) {
    let repo = common::create_test_repository(pool);

    let link = repo
        .create(NewLink {
            slug: "docs".to_string(),
            url: "https://example.com/docs".to_string(),
            description: "Team docs".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(link.slug, "docs");
    assert_eq!(link.url, "https://example.com/docs");
    assert_eq!(link.description, "Team docs");
    assert_eq!(link.hit_count, 0);
    assert!(link.last_hit_at.is_none());
    assert_eq!(link.created_at, link.updated_at);
}

#[sqlx::test]
async fn test_create_duplicate_is_conflict(pool: SqlitePool) {
    let repo = common::create_test_repository(pool.clone());

    repo.create(new_link("docs", "https://example.com/a"))
        .await
        .unwrap();
    let result = repo.create(new_link("docs", "https://example.com/b")).await;

    assert!(matches!(result, Err(AppError::Conflict(slug)) if slug == "docs"));
    assert_eq!(common::link_count(&pool).await, 1);
    let existing = repo.get("docs").await.unwrap().unwrap();
    assert_eq!(existing.url, "https://example.com/a");
}

#[sqlx::test]
async fn test_get_link(pool: SqlitePool) {
    common::create_test_link(&pool, "wiki", "https://example.com/wiki").await;
    let repo = common::create_test_repository(pool);

    let link = repo.get("wiki").await.unwrap().unwrap();

    assert_eq!(link.url, "https://example.com/wiki");
    assert_eq!(link.description, "");
}

#[sqlx::test]
async fn test_get_link_not_found(pool: SqlitePool) {
    let repo = common::create_test_repository(pool);

    let result = repo.get("missing").await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_list_all_newest_first(pool: SqlitePool) {
    let repo = common::create_test_repository(pool);

    for slug in ["first", "second", "third"] {
        repo.create(new_link(slug, "https://example.com"))
            .await
            .unwrap();
    }

    let slugs: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|link| link.slug)
        .collect();

    assert_eq!(slugs, vec!["third", "second", "first"]);
}

#[sqlx::test]
async fn test_update_link(pool: SqlitePool) {
    let repo = common::create_test_repository(pool);
    let created = repo
        .create(new_link("docs", "https://example.com/old"))
        .await
        .unwrap();

    let changed = repo
        .update(
            "docs",
            LinkChanges {
                url: "https://example.com/new".to_string(),
                description: "Moved".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(changed);
    let link = repo.get("docs").await.unwrap().unwrap();
    assert_eq!(link.url, "https://example.com/new");
    assert_eq!(link.description, "Moved");
    assert_eq!(link.created_at, created.created_at);
    assert!(link.updated_at >= created.updated_at);
}

#[sqlx::test]
async fn test_update_missing_link(pool: SqlitePool) {
    let repo = common::create_test_repository(pool.clone());

    let changed = repo
        .update(
            "ghost",
            LinkChanges {
                url: "https://example.com".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();

    assert!(!changed);
    assert_eq!(common::link_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_link(pool: SqlitePool) {
    common::create_test_link(&pool, "docs", "https://example.com").await;
    let repo = common::create_test_repository(pool.clone());

    assert!(repo.delete("docs").await.unwrap());
    assert!(repo.get("docs").await.unwrap().is_none());
    assert!(!repo.delete("docs").await.unwrap());
    assert_eq!(common::link_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_missing_link_leaves_others(pool: SqlitePool) {
    common::create_test_link(&pool, "docs", "https://example.com/docs").await;
    common::create_test_link(&pool, "wiki", "https://example.com/wiki").await;
    let repo = common::create_test_repository(pool.clone());

    assert!(!repo.delete("ghost").await.unwrap());

    assert_eq!(common::link_count(&pool).await, 2);
    assert!(repo.get("docs").await.unwrap().is_some());
    assert!(repo.get("wiki").await.unwrap().is_some());
}

#[sqlx::test]
async fn test_record_hit(pool: SqlitePool) {
    let repo = common::create_test_repository(pool.clone());
    repo.create(new_link("docs", "https://example.com"))
        .await
        .unwrap();

    repo.record_hit("docs").await.unwrap();
    let first_hit = repo.get("docs").await.unwrap().unwrap().last_hit_at.unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;
    repo.record_hit("docs").await.unwrap();
    let before_last = Utc::now();
    tokio::time::sleep(Duration::from_millis(5)).await;
    repo.record_hit("docs").await.unwrap();

    let link = repo.get("docs").await.unwrap().unwrap();
    let last_hit = link.last_hit_at.unwrap();
    assert_eq!(link.hit_count, 3);
    assert!(last_hit >= before_last);
    assert!(last_hit > first_hit);
    assert_eq!(common::hit_count(&pool, "docs").await, 3);
}

#[sqlx::test]
async fn test_record_hit_leaves_other_links(pool: SqlitePool) {
    let repo = common::create_test_repository(pool);
    repo.create(new_link("docs", "https://example.com/docs"))
        .await
        .unwrap();
    repo.create(new_link("wiki", "https://example.com/wiki"))
        .await
        .unwrap();

    repo.record_hit("docs").await.unwrap();

    let wiki = repo.get("wiki").await.unwrap().unwrap();
    assert_eq!(wiki.hit_count, 0);
    assert!(wiki.last_hit_at.is_none());
}

#[sqlx::test]
async fn test_list_all_orders_helper_and_repository_rows(pool: SqlitePool) {
    common::create_test_link(&pool, "older", "https://example.com/older").await;
    let repo = common::create_test_repository(pool);
    repo.create(new_link("newer", "https://example.com/newer"))
        .await
        .unwrap();

    let slugs: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|link| link.slug)
        .collect();

    assert_eq!(slugs, vec!["newer", "older"]);
}

#[sqlx::test]
async fn test_record_hit_missing_link(pool: SqlitePool) {
    let repo = common::create_test_repository(pool.clone());

    repo.record_hit("ghost").await.unwrap();

    assert_eq!(common::link_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_stats_empty(pool: SqlitePool) {
    let repo = common::create_test_repository(pool);

    let stats = repo.stats().await.unwrap();

    assert_eq!(stats.total_links, 0);
    assert_eq!(stats.total_hits, 0);
    assert!(stats.latest_created.is_none());
    assert!(stats.latest_hit.is_none());
}

#[sqlx::test]
async fn test_stats_totals(pool: SqlitePool) {
    let repo = common::create_test_repository(pool);
    repo.create(new_link("one", "https://example.com/1"))
        .await
        .unwrap();
    let last = repo
        .create(new_link("two", "https://example.com/2"))
        .await
        .unwrap();

    for _ in 0..3 {
        repo.record_hit("one").await.unwrap();
    }
    for _ in 0..5 {
        repo.record_hit("two").await.unwrap();
    }

    let stats = repo.stats().await.unwrap();
    let two = repo.get("two").await.unwrap().unwrap();

    assert_eq!(stats.total_links, 2);
    assert_eq!(stats.total_hits, 8);
    assert_eq!(stats.latest_created, Some(last.created_at));
    assert_eq!(stats.latest_hit, two.last_hit_at);
}
