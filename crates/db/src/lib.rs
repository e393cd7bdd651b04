//! Persistence layer for the museum catalog.
//!
//! Provides the connection pool, row models and one zero-sized repository
//! per table. Repositories take `&mut PgConnection` so a handler can hold a
//! single connection for the whole request.

pub mod models;
pub mod repositories;
pub mod rows;

use std::fmt;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub type DbPool = sqlx::PgPool;

/// Connection settings for the catalog database.
#[derive(Clone)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Upper bound on concurrently open connections.
    pub max_connections: u32,
    /// How long a request waits for a connection before giving up.
    pub acquire_timeout: Duration,
}

impl fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish_non_exhaustive()
    }
}

impl DbSettings {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Create a bounded connection pool.
///
/// The pool is lazy: no connection is opened until the first request asks
/// for one, so the server starts even when the database is down and each
/// request reports the outage on its own.
pub fn create_pool(settings: &DbSettings) -> DbPool {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_lazy_with(settings.connect_options())
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}
