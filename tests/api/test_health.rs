use crate::common::combined_app;
use axum_test::TestServer;

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::new(combined_app()).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "api-cookbook");
    assert!(body["timestamp"].is_string());
}
