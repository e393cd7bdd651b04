//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use museum_api::error::AppError;
use museum_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and HTML body.
async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id: 42,
    });

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Artist not found"));
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Invalid table name".into()));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid table name"));
}

#[tokio::test]
async fn internal_error_hides_details() {
    let err = AppError::Core(CoreError::Internal("template exploded".into()));

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("An internal error occurred"));
    assert!(!body.contains("template exploded"));
}

#[tokio::test]
async fn connection_error_returns_503() {
    let (status, body) = error_to_response(AppError::Connection(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("Database connection error"));
}

#[tokio::test]
async fn statement_errors_map_by_kind() {
    let (status, _) = error_to_response(AppError::Statement(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = error_to_response(AppError::Statement(sqlx::Error::PoolClosed)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn message_is_html_escaped() {
    let err = AppError::Core(CoreError::Validation("<b>bold</b>".into()));

    let (_, body) = error_to_response(err).await;

    assert!(body.contains("&lt;b&gt;bold&lt;/b&gt;"));
}
