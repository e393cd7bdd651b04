//! Execution side of the query console and the CSV exporter.

use museum_core::console::ConsoleQuery;
use museum_core::table::{CatalogTable, ResultSet};
use sqlx::{Connection, PgConnection};

use crate::rows::to_result_set;

/// Runs ad-hoc statements against the catalog tables.
pub struct ConsoleRepo;

impl ConsoleRepo {
    /// Execute a console query inside a read-only transaction.
    ///
    /// The transaction is always rolled back, so a fragment that tries to
    /// write fails with the store's error instead of changing data.
    pub async fn run(
        conn: &mut PgConnection,
        query: &ConsoleQuery,
    ) -> Result<ResultSet, sqlx::Error> {
        let sql = query.to_sql();
        tracing::debug!(%sql, "Running console query");

        let mut tx = conn.begin().await?;
        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await?;
        let rows = sqlx::query(&sql).fetch_all(&mut *tx).await?;
        tx.rollback().await?;

        Ok(to_result_set(&rows))
    }

    /// Every row of `table` ordered by id, for CSV export.
    pub async fn export_all(
        conn: &mut PgConnection,
        table: CatalogTable,
    ) -> Result<ResultSet, sqlx::Error> {
        let sql = format!("SELECT * FROM {table} ORDER BY id");
        let rows = sqlx::query(&sql).fetch_all(&mut *conn).await?;
        Ok(to_result_set(&rows))
    }
}
