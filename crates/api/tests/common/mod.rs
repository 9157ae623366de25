//! Shared harness for HTTP-level integration tests.
//!
//! Builds the production router (full middleware stack) on top of a
//! `#[sqlx::test]`-managed database and provides small request helpers
//! driving it through `tower::ServiceExt::oneshot`.

#![allow(dead_code)] // each test binary uses a subset of these helpers

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use jot_api::auth::jwt::JwtConfig;
use jot_api::config::ServerConfig;
use jot_api::router::build_app_router;
use jot_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This reuses the production router builder so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a single request through the router.
async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &Router, path: &str) -> Response {
    send(app, "GET", path, None, None).await
}

pub async fn get_auth(app: &Router, path: &str, token: &str) -> Response {
    send(app, "GET", path, Some(token), None).await
}

pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> Response {
    send(app, "POST", path, None, Some(body)).await
}

pub async fn post_json_auth(
    app: &Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, "POST", path, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: &Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, "PUT", path, Some(token), Some(body)).await
}

pub async fn delete_auth(app: &Router, path: &str, token: &str) -> Response {
    send(app, "DELETE", path, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Register a fresh user via the API and log them in, returning the session
/// token and user id.
pub async fn register_and_login(app: &Router, name: &str, email: &str) -> (String, Uuid) {
    let password = "test_password_123!";

    let response = post_json(
        app,
        "/api/register",
        serde_json::json!({ "name": name, "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), 201, "registration should succeed");

    let response = post_json(
        app,
        "/api/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), 200, "login should succeed");

    let json = body_json(response).await;
    let token = json["access_token"]
        .as_str()
        .expect("login response must contain access_token")
        .to_string();
    let user_id: Uuid = json["user"]["id"]
        .as_str()
        .expect("login response must contain user id")
        .parse()
        .expect("user id must be a UUID");

    (token, user_id)
}
