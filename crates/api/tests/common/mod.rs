#![allow(dead_code)]

use std::net::IpAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use museum_api::config::{AppEnv, ServerConfig};
use museum_api::router::build_app_router;
use museum_api::state::AppState;
use museum_db::{DbPool, DbSettings};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
///
/// The database settings are placeholders; tests hand the app a ready pool.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        request_timeout_secs: 30,
        app_env: AppEnv::Testing,
        secret_key: TEST_SECRET.to_string(),
        db: DbSettings {
            host: "127.0.0.1".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            database: "museumapp_test".to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        },
    }
}

/// Build the full application router, with the production middleware stack,
/// on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState::new(pool, test_config()).unwrap();
    build_app_router(state)
}

/// A lazy pool pointed at a port nothing listens on, so every acquire fails.
pub fn unreachable_pool() -> DbPool {
    museum_db::create_pool(&DbSettings {
        host: "127.0.0.1".to_string(),
        port: 1,
        user: "nobody".to_string(),
        password: "nothing".to_string(),
        database: "missing".to_string(),
        max_connections: 1,
        acquire_timeout: Duration::from_secs(1),
    })
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET with a `Cookie` header, e.g. the flash cookie from a redirect.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect without Location")
        .to_str()
        .unwrap()
}

/// The `name=value` pair of the first `Set-Cookie` header, ready to send back.
pub fn set_cookie_pair(response: &Response) -> Option<String> {
    let header = response.headers().get(SET_COOKIE)?.to_str().ok()?;
    header.split(';').next().map(|pair| pair.trim().to_string())
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_artist(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO artists (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}
