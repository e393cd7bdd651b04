pub mod catalog;

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, export, health, playground};
use crate::state::AppState;

/// Build the full route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                 dashboard
/// /test                             static liveness page
/// /health                           JSON health check
///
/// /artists, /artworks,
/// /museums, /collections            list, create, edit, delete (see catalog)
///
/// /sql-playground                   query console form (GET), run (POST)
/// /export/{table_name}              CSV download of a catalog table
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/test", get(health::hello))
        .route("/health", get(health::health_check))
        // Catalog CRUD.
        .nest("/artists", catalog::artists_router())
        .nest("/artworks", catalog::artworks_router())
        .nest("/museums", catalog::museums_router())
        .nest("/collections", catalog::collections_router())
        // Query console and export.
        .route("/sql-playground", get(playground::show).post(playground::run))
        .route("/export/{table_name}", get(export::export_table))
}
