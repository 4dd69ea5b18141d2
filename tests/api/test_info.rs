use crate::common::combined_app;
use axum_test::TestServer;

#[tokio::test]
async fn test_info_reports_the_active_settings() {
    let server = TestServer::new(combined_app()).unwrap();

    let response = server.get("/info").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["app_name"], "Awesome API");
    assert_eq!(body["admin_email"], "admin@example.com");
    assert_eq!(body["items_per_user"], 50);
}
