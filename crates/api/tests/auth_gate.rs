//! Bearer-token handling on protected routes.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use common::{body_json, claims_for, sign, test_config};

fn create_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/restaurant/create")
        .header(CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder
        .body(Body::from(
            serde_json::json!({"name": "Casa", "location": "X", "phoneNumber": "1"}).to_string(),
        ))
        .unwrap()
}

async fn assert_rejected(authorization: Option<&str>) {
    let app = common::build_test_app();
    let response = app
        .router
        .clone()
        .oneshot(create_request(authorization))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_missing_header_is_rejected() {
    assert_rejected(None).await;
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected() {
    let token = common::token_for("owner-1", "owner");
    assert_rejected(Some(&format!("Basic {token}"))).await;
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    assert_rejected(Some("Bearer not.a.jwt")).await;
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let token = sign(&claims_for("owner-1", "owner", 900), "some-other-secret-entirely-different");
    assert_rejected(Some(&format!("Bearer {token}"))).await;
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let token = sign(&claims_for("owner-1", "owner", -3600), &test_config().jwt.secret);
    assert_rejected(Some(&format!("Bearer {token}"))).await;
}

#[tokio::test]
async fn test_hand_signed_valid_token_is_accepted() {
    let app = common::build_test_app();
    let token = sign(&claims_for("owner-1", "owner", 900), &test_config().jwt.secret);

    let response = app
        .router
        .clone()
        .oneshot(create_request(Some(&format!("Bearer {token}"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_public_reads_need_no_token() {
    let app = common::build_test_app();
    let response = common::get(&app.router, "/api/restaurant").await;
    assert_eq!(response.status(), StatusCode::OK);
}
