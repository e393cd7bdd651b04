use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A recently added artwork for the dashboard gallery.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentArtwork {
    pub title: String,
    pub image_url: Option<String>,
    pub artist_name: Option<String>,
    pub creation_date: Option<NaiveDate>,
}

/// Dashboard statistics. Each figure is `None` when its query failed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    pub artists: Option<i64>,
    pub artworks: Option<i64>,
    pub museums: Option<i64>,
    pub collections: Option<i64>,
    pub recent_artworks: Vec<RecentArtwork>,
}
