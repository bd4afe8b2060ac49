//! Common test utilities for integration tests.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot` against
//! the in-memory store backend, so no database is required.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use persistence::{MemoryContentStore, MemorySessionStore};
use serde_json::{json, Value};
use showcase_api::{app::create_app, config::Config};
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_ADMIN_PASSWORD: &str = "test-admin-secret";

/// Test configuration: memory backend, login throttling disabled.
pub fn test_config() -> Config {
    Config::load_for_test(&[]).expect("Failed to build test config")
}

/// Test configuration with extra `section.key` overrides.
pub fn test_config_with(overrides: &[(&str, &str)]) -> Config {
    Config::load_for_test(overrides).expect("Failed to build test config")
}

/// Create a test application router over fresh in-memory stores.
pub fn create_test_app(config: Config) -> Router {
    create_app(
        config,
        Arc::new(MemoryContentStore::new()),
        Arc::new(MemorySessionStore::new()),
    )
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// Build a JSON request without authentication.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a JSON request with a bearer token.
pub fn json_request_with_auth(method: Method, uri: &str, body: Value, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_request_with_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn delete_request_with_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn post_request_with_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Log in with the test password and return the issued token.
pub async fn admin_login(app: &Router) -> String {
    let response = send(
        app,
        json_request(
            Method::POST,
            "/api/admin/login",
            json!({ "password": TEST_ADMIN_PASSWORD }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    body["token"]
        .as_str()
        .unwrap_or_else(|| panic!("Missing token in login response: {}", body))
        .to_string()
}

/// Create a short video through the API and return its JSON.
pub async fn create_short_video(app: &Router, token: &str, title: &str, order: i32) -> Value {
    let response = send(
        app,
        json_request_with_auth(
            Method::POST,
            "/api/short-videos",
            json!({
                "title": title,
                "url": format!("https://www.instagram.com/reel/{}/", title.replace(' ', "-")),
                "order": order
            }),
            token,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await
}

pub async fn create_long_video(app: &Router, token: &str, youtube_id: &str, order: i32) -> Value {
    let response = send(
        app,
        json_request_with_auth(
            Method::POST,
            "/api/long-videos",
            json!({
                "title": format!("Video {}", youtube_id),
                "youtube_id": youtube_id,
                "order": order
            }),
            token,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await
}

pub async fn create_testimonial(app: &Router, token: &str, body: Value) -> Value {
    let response = send(
        app,
        json_request_with_auth(Method::POST, "/api/testimonials", body, token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await
}
