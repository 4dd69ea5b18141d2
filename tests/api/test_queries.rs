use crate::common::combined_app;
use axum::http::StatusCode;
use axum_test::TestServer;

#[tokio::test]
async fn test_listing_without_q() {
    let server = TestServer::new(combined_app()).unwrap();

    let response = server.get("/queries/items/").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["items"][0]["item_id"], "Foo");
    assert_eq!(body["items"][1]["item_id"], "Bar");
    // No q supplied, no q echoed
    assert!(body.get("q").is_none());
}

#[tokio::test]
async fn test_valid_q_is_echoed() {
    let server = TestServer::new(combined_app()).unwrap();

    let response = server
        .get("/queries/items/")
        .add_query_param("q", "fixedquery")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["q"], "fixedquery");
}

#[tokio::test]
async fn test_alias_is_accepted() {
    let server = TestServer::new(combined_app()).unwrap();

    let response = server
        .get("/queries/items/")
        .add_query_param("item-query", "fixedquery")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["q"], "fixedquery");
}

#[tokio::test]
async fn test_short_q_lists_every_violation() {
    let server = TestServer::new(combined_app()).unwrap();

    // Two characters: violates min_length and the pattern
    let response = server
        .get("/queries/items/")
        .add_query_param("q", "fi")
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json();
    let errors = body["detail"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e["field"] == "q"));
    assert!(errors.iter().any(|e| e["context"] == "min_length"));
    assert!(errors.iter().any(|e| e["context"] == "pattern"));
    // Query validation does not echo a request body
    assert!(body["detail"].get("body").is_none());
}

#[tokio::test]
async fn test_overlong_q_is_rejected() {
    let server = TestServer::new(combined_app()).unwrap();

    let response = server
        .get("/queries/items/")
        .add_query_param("q", "x".repeat(51))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json();
    let errors = body["detail"]["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["context"] == "max_length"));
}

#[tokio::test]
async fn test_wrong_value_fails_the_pattern() {
    let server = TestServer::new(combined_app()).unwrap();

    let response = server
        .get("/queries/items/")
        .add_query_param("q", "somethingelse")
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json();
    let errors = body["detail"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["context"], "pattern");
}
