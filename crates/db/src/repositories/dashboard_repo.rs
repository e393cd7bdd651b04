//! Read-only aggregates for the dashboard.

use museum_core::table::CatalogTable;
use sqlx::PgConnection;

use crate::models::dashboard::{DashboardStats, RecentArtwork};

/// Number of artworks shown in the dashboard gallery.
pub const RECENT_ARTWORKS_LIMIT: i64 = 6;

/// Provides the dashboard's row counts and recent artworks.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Count every row of `table`.
    pub async fn count(conn: &mut PgConnection, table: CatalogTable) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {table}");
        sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(&mut *conn)
            .await
    }

    /// The most recently created artworks with their artist's name, newest first.
    pub async fn recent_artworks(
        conn: &mut PgConnection,
        limit: i64,
    ) -> Result<Vec<RecentArtwork>, sqlx::Error> {
        sqlx::query_as::<_, RecentArtwork>(
            "SELECT a.title, a.image_url, ar.name AS artist_name, a.creation_date \
             FROM artworks a \
             LEFT JOIN artists ar ON a.artist_id = ar.id \
             ORDER BY a.created_at DESC, a.id DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&mut *conn)
        .await
    }

    /// Gather all dashboard figures.
    ///
    /// Each query runs on its own; a failure is logged and leaves that figure
    /// empty while the rest are still reported.
    pub async fn stats(conn: &mut PgConnection) -> DashboardStats {
        let mut stats = DashboardStats::default();

        for table in CatalogTable::ALL {
            let count = match Self::count(conn, table).await {
                Ok(count) => Some(count),
                Err(e) => {
                    tracing::warn!(%table, error = %e, "Failed to count rows");
                    None
                }
            };
            match table {
                CatalogTable::Artists => stats.artists = count,
                CatalogTable::Artworks => stats.artworks = count,
                CatalogTable::Museums => stats.museums = count,
                CatalogTable::Collections => stats.collections = count,
            }
        }

        match Self::recent_artworks(conn, RECENT_ARTWORKS_LIMIT).await {
            Ok(recent) => stats.recent_artworks = recent,
            Err(e) => tracing::warn!(error = %e, "Failed to load recent artworks"),
        }

        stats
    }
}
