//! Integration tests for recfilter-autocomplete API endpoints
//!
//! Tests cover:
//! - Autocomplete filtering, ordering, and empty/unknown cases
//! - Catalog failure mapping to a 500 JSON error
//! - Health endpoint
//! - Client script serving
//! - End-to-end against a SQLite catalog file

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use recfilter_autocomplete::{build_router, AppState};
use recfilter_common::catalog::CATALOG_SCHEMA;
use recfilter_common::{ArtistId, CatalogProvider, Error, InMemoryCatalog, Song, SqliteCatalog};
use serde_json::{json, Value};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: artist 7 with two songs, in provider order
fn test_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_songs(
            7i64,
            vec![Song::new(101, "Hey Jude"), Song::new(102, "Let It Be")],
        )
        .with_songs("carpenters", vec![Song::new(1, "Yesterday Once More")])
}

/// Test helper: Create app over the given catalog
fn setup_app(catalog: impl CatalogProvider + 'static) -> axum::Router {
    build_router(AppState::new(Arc::new(catalog)))
}

/// Test helper: GET request
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Autocomplete Endpoint
// =============================================================================

#[tokio::test]
async fn test_autocomplete_substring_match() {
    let app = setup_app(test_catalog());

    let response = app.oneshot(get("/autocomplete/7?q=it")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!([{ "value": "Let It Be", "label": "Let It Be" }]));
}

#[tokio::test]
async fn test_autocomplete_empty_query_returns_all_in_order() {
    let app = setup_app(test_catalog());

    let response = app.oneshot(get("/autocomplete/7?q=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(
        body,
        json!([
            { "value": "Hey Jude", "label": "Hey Jude" },
            { "value": "Let It Be", "label": "Let It Be" },
        ])
    );
}

#[tokio::test]
async fn test_autocomplete_missing_query_returns_all() {
    let app = setup_app(test_catalog());

    let response = app.oneshot(get("/autocomplete/7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_autocomplete_case_insensitive() {
    let app = setup_app(test_catalog());

    let response = app
        .oneshot(get("/autocomplete/carpenters?q=yester"))
        .await
        .unwrap();

    let body = extract_json(response.into_body()).await;
    assert_eq!(body[0]["value"], "Yesterday Once More");
    assert_eq!(body[0]["label"], "Yesterday Once More");
}

#[tokio::test]
async fn test_autocomplete_unknown_artist_is_empty_array() {
    let app = setup_app(test_catalog());

    let response = app.oneshot(get("/autocomplete/12345?q=a")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_autocomplete_no_match_is_empty_array() {
    let app = setup_app(test_catalog());

    let response = app.oneshot(get("/autocomplete/7?q=help")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_autocomplete_url_encoded_query() {
    let app = setup_app(test_catalog());

    let response = app
        .oneshot(get("/autocomplete/7?q=let%20it"))
        .await
        .unwrap();

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!([{ "value": "Let It Be", "label": "Let It Be" }]));
}

#[tokio::test]
async fn test_autocomplete_repeated_query_uses_last_value() {
    let app = setup_app(test_catalog());

    let response = app
        .oneshot(get("/autocomplete/7?q=a&q=jude"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!([{ "value": "Hey Jude", "label": "Hey Jude" }]));
}

#[tokio::test]
async fn test_autocomplete_undecodable_artist_is_empty_array() {
    let app = setup_app(test_catalog());

    let response = app.oneshot(get("/autocomplete/%FF?q=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!([]));
}

struct UnreachableCatalog;

#[async_trait]
impl CatalogProvider for UnreachableCatalog {
    async fn songs_by_artist(&self, _artist_id: &ArtistId) -> recfilter_common::Result<Vec<Song>> {
        Err(Error::Catalog("catalog unreachable".to_string()))
    }
}

#[tokio::test]
async fn test_catalog_failure_is_server_error() {
    let app = setup_app(UnreachableCatalog);

    let response = app.oneshot(get("/autocomplete/7?q=it")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "CATALOG_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("catalog unreachable"));
}

// =============================================================================
// Health and Assets
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app(test_catalog());

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "recfilter-autocomplete");
    assert!(body["version"].is_string());
    assert!(body["started_at"].is_string());
}

#[tokio::test]
async fn test_serves_client_script() {
    let app = setup_app(test_catalog());

    let response = app
        .oneshot(get("/js/recording_filter.js"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/javascript"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let script = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(script.contains("Drupal.behaviors.recordingFilter"));
}

// =============================================================================
// SQLite Catalog End-to-End
// =============================================================================

#[tokio::test]
async fn test_autocomplete_against_sqlite_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.db");

    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await.unwrap();
    sqlx::raw_sql(CATALOG_SCHEMA).execute(&pool).await.unwrap();
    sqlx::query(
        "INSERT INTO songs (song_id, artist_id, title) VALUES
         (101, '7', 'Hey Jude'), (102, '7', 'Let It Be'), (301, '9', 'Let It Go')",
    )
    .execute(&pool)
    .await
    .unwrap();
    pool.close().await;

    let catalog = SqliteCatalog::open_readonly(&path).await.unwrap();
    let app = setup_app(catalog);

    let response = app.oneshot(get("/autocomplete/7?q=LET")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body, json!([{ "value": "Let It Be", "label": "Let It Be" }]));
}
