use crate::common::combined_app;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_image_list_is_echoed() {
    let server = TestServer::new(combined_app()).unwrap();

    let response = server
        .post("/nested/images/multiple/")
        .json(&json!([
            {"url": "https://example.com/a.png", "name": "a"},
            {"url": "https://example.com/b.png", "name": "b"},
        ]))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let images = body.as_array().unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0]["url"], "https://example.com/a.png");
    assert_eq!(images[1]["name"], "b");
}

#[tokio::test]
async fn test_empty_list_is_valid() {
    let server = TestServer::new(combined_app()).unwrap();

    let response = server.post("/nested/images/multiple/").json(&json!([])).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_invalid_url_is_rejected() {
    let server = TestServer::new(combined_app()).unwrap();

    let response = server
        .post("/nested/images/multiple/")
        .json(&json!([{"url": "not a url", "name": "broken"}]))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
