//! Tests for `AppError` → HTTP response mapping.
//!
//! Core variants and panic payloads are converted directly; request
//! rejections are driven through the router.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use common::{body_json, get, StubRelay};
use folio_api::error::{panic_response, AppError};
use folio_core::error::CoreError;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("unknown category 'games'".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "unknown category 'games'");
}

#[tokio::test]
async fn core_internal_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("secret dispatch panic".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(!json.to_string().contains("secret"));
}

#[tokio::test]
async fn panic_payload_never_reaches_the_client() {
    let payloads: [Box<dyn std::any::Any + Send>; 3] = [
        Box::new("secret &str payload"),
        Box::new(String::from("secret String payload")),
        Box::new(42_u32),
    ];
    for payload in payloads {
        let response = panic_response(payload);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert!(!json.to_string().contains("secret"));
    }
}

// ---------------------------------------------------------------------------
// Request rejections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_project_id_is_a_json_bad_request() {
    let app = common::build_test_app(StubRelay::accepting());
    let response = get(app, "/api/v1/projects/not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_draft_body_is_a_json_bad_request() {
    let app = common::build_test_app(StubRelay::accepting());
    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/contact/draft")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn draft_without_json_content_type_is_a_json_bad_request() {
    let app = common::build_test_app(StubRelay::accepting());
    let request = Request::builder()
        .method("PATCH")
        .uri("/api/v1/contact/draft")
        .body(Body::from("name=Ada"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn repeated_query_key_is_a_json_bad_request() {
    let app = common::build_test_app(StubRelay::accepting());
    let response = get(app, "/api/v1/projects?category=web&category=mobile").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}
