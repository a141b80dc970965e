mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use tinylink::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = common::create_test_server();
    common::seed_link(&repo, "redirect1", "https://example.com/target").await;

    let response = server.get("/redirect1").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_encodes_target_not_valid_in_header() {
    let (server, repo) = common::create_test_server();

    server
        .post("/api/links")
        .json(&json!({ "url": "https://a.com/\nx", "code": "bad" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/bad").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://a.com/%0Ax");

    let stored = repo.find_by_code("bad").await.unwrap().unwrap();
    assert_eq!(stored.url, "https://a.com/\nx");
    assert_eq!(stored.clicks, 1);
}

#[tokio::test]
async fn test_redirect_encodes_non_ascii_target() {
    let (server, repo) = common::create_test_server();
    common::seed_link(&repo, "cafe", "https://example.com/café?q=a b").await;

    let response = server.get("/cafe").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header("location"),
        "https://example.com/caf%C3%A9?q=a%20b"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    assert!(response.headers().get("location").is_none());
}

#[tokio::test]
async fn test_redirect_deleted_link_not_found() {
    let (server, repo) = common::create_test_server();
    common::seed_deleted_link(&repo, "gone", "https://example.com").await;

    server.get("/gone").await.assert_status_not_found();

    let stored = repo.find_by_code("gone").await.unwrap().unwrap();
    assert_eq!(stored.clicks, 0);
}

#[tokio::test]
async fn test_redirect_counts_each_click() {
    let (server, repo) = common::create_test_server();
    common::seed_link(&repo, "clickme", "https://example.com").await;

    server
        .get("/clickme")
        .await
        .assert_status(StatusCode::FOUND);
    let first = repo.find_by_code("clickme").await.unwrap().unwrap();

    server
        .get("/clickme")
        .await
        .assert_status(StatusCode::FOUND);
    let second = repo.find_by_code("clickme").await.unwrap().unwrap();

    assert_eq!(first.clicks, 1);
    assert_eq!(second.clicks, 2);
    assert!(first.last_clicked.is_some());
    assert!(second.last_clicked >= first.last_clicked);
}

#[tokio::test]
async fn test_link_lifecycle() {
    let (server, repo) = common::create_test_server();

    let created = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let body = created.json::<Value>();
    let code = body["code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 6);
    assert_eq!(body["clicks"], 0);

    let redirect = server.get(&format!("/{code}")).await;
    redirect.assert_status(StatusCode::FOUND);
    assert_eq!(redirect.header("location"), "https://example.com");

    let stats = server.get(&format!("/api/links/{code}")).await;
    stats.assert_status_ok();
    let stats = stats.json::<Value>();
    assert_eq!(stats["clicks"], 1);
    assert!(stats["lastClicked"].is_string());

    server
        .delete(&format!("/api/links/{code}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/links/{code}"))
        .await
        .assert_status_not_found();
    server
        .get(&format!("/{code}"))
        .await
        .assert_status_not_found();

    let stored = repo.find_by_code(&code).await.unwrap().unwrap();
    assert!(stored.deleted);
    assert_eq!(stored.clicks, 1);
}
