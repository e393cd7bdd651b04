use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
///
/// Always 200; a store that cannot be reached only degrades the status.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match museum_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// GET /test -- static liveness page that never touches the database.
pub async fn hello() -> Html<&'static str> {
    Html("<h1>Hello World!</h1><p>The museum catalog is running.</p>")
}
