//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against a real
//! two-tier store rooted in a temp directory.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tierkv::{api::create_router, store, AppState};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let store = store::layered(dir.path(), 64).unwrap();
    (dir, create_router(AppState::new(store)))
}

async fn body_bytes(body: Body) -> Vec<u8> {
    axum::body::to_bytes(body, usize::MAX).await.unwrap().to_vec()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn put(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// == Value Endpoint Tests ==

#[tokio::test]
async fn test_put_then_get_roundtrip() {
    let (_dir, app) = create_test_app();

    let response = app.clone().oneshot(put("/greeting", "hello")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/greeting")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response.into_body()).await, b"hello");
}

#[tokio::test]
async fn test_put_binary_value_roundtrip() {
    let (_dir, app) = create_test_app();
    let value: Vec<u8> = (0..=255).collect();

    let response = app
        .clone()
        .oneshot(put("/binary", value.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/binary")).await.unwrap();
    assert_eq!(body_bytes(response.into_body()).await, value);
}

#[tokio::test]
async fn test_put_empty_value_roundtrip() {
    let (_dir, app) = create_test_app();

    let response = app.clone().oneshot(put("/empty", "")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/empty")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response.into_body()).await.is_empty());
}

#[tokio::test]
async fn test_put_overwrites() {
    let (_dir, app) = create_test_app();

    app.clone().oneshot(put("/key", "old")).await.unwrap();
    app.clone().oneshot(put("/key", "new")).await.unwrap();

    let response = app.oneshot(get("/key")).await.unwrap();
    assert_eq!(body_bytes(response.into_body()).await, b"new");
}

#[tokio::test]
async fn test_nested_key_roundtrip() {
    let (dir, app) = create_test_app();

    app.clone()
        .oneshot(put("/users/42/profile", "data"))
        .await
        .unwrap();

    // Slash-bearing keys nest directories under the data root.
    assert!(dir.path().join("users").join("42").join("profile").is_file());

    let response = app.oneshot(get("/users/42/profile")).await.unwrap();
    assert_eq!(body_bytes(response.into_body()).await, b"data");
}

#[tokio::test]
async fn test_get_missing_returns_404_with_error_body() {
    let (_dir, app) = create_test_app();

    let response = app.oneshot(get("/nonexistent")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_delete_then_get_returns_404() {
    let (_dir, app) = create_test_app();

    app.clone().oneshot(put("/doomed", "value")).await.unwrap();

    let response = app.clone().oneshot(delete("/doomed")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/doomed")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_returns_404() {
    let (_dir, app) = create_test_app();

    let response = app.oneshot(delete("/never-stored")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_path_rejected() {
    let (_dir, app) = create_test_app();

    for request in [get("/"), put("/", "value"), delete("/")] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_reflect_traffic() {
    let (_dir, app) = create_test_app();

    app.clone().oneshot(put("/key", "value")).await.unwrap();
    app.clone().oneshot(get("/key")).await.unwrap(); // cache hit
    app.clone().oneshot(get("/missing")).await.unwrap(); // cache miss

    let response = app.oneshot(get("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    assert_eq!(json["resident_entries"].as_u64().unwrap(), 1);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, app) = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
