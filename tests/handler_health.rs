mod common;

#[tokio::test]
async fn test_health_reports_store_status() {
    let server = common::test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert!(body["version"].is_string());
}
