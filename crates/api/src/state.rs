use std::sync::Arc;

use handlebars::{Handlebars, TemplateError};
use sqlx::pool::PoolConnection;
use sqlx::Postgres;

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: museum_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Compiled page templates.
    pub templates: Arc<Handlebars<'static>>,
}

impl AppState {
    /// Build the state, compiling every page template up front.
    pub fn new(pool: museum_db::DbPool, config: ServerConfig) -> Result<Self, TemplateError> {
        let templates = views::templates()?;
        Ok(Self {
            pool,
            config: Arc::new(config),
            templates: Arc::new(templates),
        })
    }

    /// Acquire the connection used for the rest of the request.
    ///
    /// It returns to the pool when dropped, on every exit path.
    pub async fn connection(&self) -> AppResult<PoolConnection<Postgres>> {
        self.pool.acquire().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to acquire database connection");
            AppError::Connection(e)
        })
    }
}
