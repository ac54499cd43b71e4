//! Transport-layer tests: routing, validation, and envelope shape.
//!
//! Built on a lazy pool so no database connection is ever opened; every
//! request here is rejected before a repository call would happen.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use news_api::api::{create_router, AppState};

fn test_app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost:5432/newsapi_test")
        .expect("lazy pool");
    create_router(AppState::new(pool), Duration::from_secs(5))
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let response = test_app()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("OK"));
}

#[tokio::test]
async fn create_topic_with_short_name_is_rejected() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/topics",
            r#"{"name": "a", "slug": "politics"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("name"));
}

#[tokio::test]
async fn create_news_with_short_title_is_rejected() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/news",
            r#"{
                "title": "abc",
                "content": "content long enough to pass",
                "author_id": 1,
                "slug": "abc-slug"
            }"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("title"));
}

#[tokio::test]
async fn create_news_with_unknown_status_is_rejected() {
    // Unknown enum variant fails deserialization before validation runs.
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/news",
            r#"{
                "title": "A valid title",
                "content": "content long enough to pass",
                "author_id": 1,
                "slug": "valid-slug",
                "status": "archived"
            }"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_news_with_missing_required_field_is_rejected() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/news",
            r#"{"title": "A valid title"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_news_with_non_positive_topic_id_is_rejected() {
    let response = test_app()
        .oneshot(json_request(
            "PUT",
            "/api/news/some-slug",
            r#"{"topic_ids": [1, 0]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("topic_ids"));
}

#[tokio::test]
async fn create_user_with_invalid_email_is_rejected() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/users",
            r#"{"name": "Jane", "email": "not-an-email"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("email"));
}
