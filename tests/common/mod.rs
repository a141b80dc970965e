#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use tinylink::domain::entities::NewLink;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::InMemoryLinkRepository;
use tinylink::routes::build_router;
use tinylink::state::AppState;

/// State backed by a fresh in-memory repository.
///
/// The repository is returned as well so tests can inspect records the API
/// hides, such as soft-deleted links.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repo.clone());

    (state, repo)
}

/// Full application router over an in-memory store.
pub fn create_test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(build_router(state)).unwrap();

    (server, repo)
}

pub async fn seed_link(repo: &InMemoryLinkRepository, code: &str, url: &str) {
    repo.insert_if_absent(NewLink {
        code: code.to_string(),
        url: url.to_string(),
    })
    .await
    .unwrap();
}

pub async fn seed_deleted_link(repo: &InMemoryLinkRepository, code: &str, url: &str) {
    seed_link(repo, code, url).await;
    assert!(repo.soft_delete(code).await.unwrap());
}

pub async fn create_pg_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_pg_deleted_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, url, deleted) VALUES ($1, $2, TRUE)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}
