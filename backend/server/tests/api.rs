//! In-process tests of the signup API over the memory store.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use serde_json::Value;
use server::{
    app,
    config::Config,
    memory::MemoryStorage,
    state::AppState,
    storage::{Storage, SubscriberStore},
};
use tower::ServiceExt;

fn state() -> Arc<AppState> {
    AppState::with_storage(Config::default(), Storage::Memory(MemoryStorage::new()))
}

async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/subscribers")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_create_subscriber() {
    let (status, body) = post_json(app(state()), r#"{"email":"test@example.com"}"#).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "test@example.com");
    assert!(body["id"].as_u64().unwrap() >= 1);
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_duplicate_email_creates_second_record() {
    let state = state();

    let (_, first) = post_json(app(state.clone()), r#"{"email":"test@example.com"}"#).await;
    let (status, second) = post_json(app(state.clone()), r#"{"email":"test@example.com"}"#).await;

    // memory storage does not enforce unique emails
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["email"], "test@example.com");
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_created_subscriber_is_found() {
    let state = state();

    let (_, body) = post_json(app(state.clone()), r#"{"email":"a@b.com"}"#).await;
    let found = state
        .storage
        .get_subscriber_by_email("a@b.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(Some(found.id), body["id"].as_u64());
    assert_eq!(found.email, "a@b.com");
    assert_eq!(
        state.storage.get_subscriber_by_email("nobody@b.com").await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_invalid_email() {
    let state = state();

    let (status, body) = post_json(app(state.clone()), r#"{"email":"not-an-email"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid email address");
    assert_eq!(body["field"], "email");

    // nothing reached the store
    let (_, created) = post_json(app(state), r#"{"email":"a@b.com"}"#).await;
    assert_eq!(created["id"], 1);
}

#[tokio::test]
async fn test_malformed_payload() {
    let (status, body) = post_json(app(state()), "{").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Malformed payload");
    assert!(body.get("field").is_none());
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app(state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn test_unknown_route() {
    let request = Request::builder()
        .uri("/api/unknown")
        .body(Body::empty())
        .unwrap();

    let response = app(state()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
