#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use jsonwebtoken::{encode, EncodingKey, Header};
use mesa_api::auth::jwt::{Claims, JwtConfig};
use mesa_api::config::{ServerConfig, StoreBackend};
use mesa_api::router::build_app_router;
use mesa_api::state::AppState;
use mesa_db::store::memory::MemoryStore;

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        },
    }
}

/// The app under test plus a handle on its store for direct assertions.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

/// Build the full application router (same middleware stack as `main.rs`)
/// over a fresh in-memory store.
pub fn build_test_app() -> TestApp {
    let config = test_config();
    let store = Arc::new(MemoryStore::new());

    let state = AppState {
        store: store.clone(),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
    }
}

/// Sign claims with `secret`, as the account service would.
pub fn sign(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("token encoding should succeed")
}

/// Claims for `identity_id` expiring `exp_offset_secs` from now.
pub fn claims_for(identity_id: &str, role: &str, exp_offset_secs: i64) -> Claims {
    let now = chrono::Utc::now().timestamp();
    Claims {
        id: identity_id.to_string(),
        role: role.to_string(),
        exp: now + exp_offset_secs,
        iat: now,
    }
}

/// Mint a valid bearer token for the given identity.
pub fn token_for(identity_id: &str, role: &str) -> String {
    sign(&claims_for(identity_id, role, 15 * 60), &test_config().jwt.secret)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("router should not fail")
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, builder(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(
        app,
        builder(Method::GET, uri, Some(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(
        app,
        builder(Method::DELETE, uri, Some(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(
        app,
        builder(method, uri, token)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, None, body).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send_json(app, Method::POST, uri, Some(token), body).await
}

pub async fn patch_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send_json(app, Method::PATCH, uri, Some(token), body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a restaurant through the API as `owner_id` (role `owner`) and
/// return its id as stored.
pub async fn seed_restaurant(app: &TestApp, owner_id: &str, name: &str) -> String {
    use mesa_db::store::Store;

    let token = token_for(owner_id, "owner");
    let response = post_json_auth(
        &app.router,
        "/api/restaurant/create",
        &token,
        serde_json::json!({
            "name": name,
            "location": "Calle Mayor 1",
            "cuisinType": "Tapas",
            "phoneNumber": "600000000",
            "photos": ["front.jpg"],
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    app.store
        .list_restaurants()
        .await
        .unwrap()
        .into_iter()
        .rev()
        .find(|r| r.name == name && r.owner == owner_id)
        .expect("seeded restaurant should be stored")
        .id
        .to_string()
}
