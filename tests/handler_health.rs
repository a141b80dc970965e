mod common;

#[tokio::test]
async fn test_root_greeting() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text("Hello World!");
}

#[tokio::test]
async fn test_healthz() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/api/healthz").await;

    response.assert_status_ok();
    response.assert_text("OK");
}
