mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn test_health_reports_memory_store() {
    let app = common::build_test_app();
    let response = get(&app.router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store"], "memory");
    assert_eq!(json["store_healthy"], true);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = common::build_test_app();
    let response = get(&app.router, "/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = common::build_test_app();
    let response = get(&app.router, "/api/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
