#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gardenspace_api::auth::jwt::JwtConfig;
use gardenspace_api::config::{LogFormat, ServerConfig};
use gardenspace_api::router::build_app_router;
use gardenspace_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// A password that satisfies the registration policy.
pub const STRONG_PASSWORD: &str = "Garden_2024!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        database_max_connections: 5,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
        },
    }
}

/// Build the full application router, with every middleware layer, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, None, body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Create a brigade through the API and return its id.
pub async fn create_brigade(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/brigades",
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), 201, "brigade creation failed");
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a collector through the API and return its id.
pub async fn create_collector(pool: &PgPool, brigade_id: i64, full_name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/brigades/collectors",
        serde_json::json!({
            "full_name": full_name,
            "birth_year": 1990,
            "brigade_id": brigade_id,
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "collector creation failed");
    body_json(response).await["id"].as_i64().unwrap()
}

/// Registration payload for `username` that passes every validation rule.
pub fn registration(username: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "full_name": "Anna Sadovaya",
        "password": STRONG_PASSWORD,
        "birth_date": "1995-05-17",
        "address": "Garden street 1",
        "gender": "Женский",
        "hobby": "Roses",
        "blood_group": "2",
        "rh_factor": "+",
    })
}
