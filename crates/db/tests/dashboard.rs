//! Integration tests for the dashboard aggregates.

use museum_core::table::CatalogTable;
use museum_db::repositories::DashboardRepo;
use sqlx::PgPool;

async fn insert_artist(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO artists (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn insert_artwork(pool: &PgPool, artist_id: Option<i64>, title: &str, minutes_ago: i32) {
    sqlx::query(
        "INSERT INTO artworks (title, artist_id, created_at) \
         VALUES ($1, $2, now() - make_interval(mins => $3))",
    )
    .bind(title)
    .bind(artist_id)
    .bind(minutes_ago)
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_store_counts_zero(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let stats = DashboardRepo::stats(&mut conn).await;

    assert_eq!(stats.artists, Some(0));
    assert_eq!(stats.artworks, Some(0));
    assert_eq!(stats.museums, Some(0));
    assert_eq!(stats.collections, Some(0));
    assert!(stats.recent_artworks.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn counts_match_row_counts(pool: PgPool) {
    let artist = insert_artist(&pool, "Degas").await;
    insert_artist(&pool, "Cassatt").await;
    insert_artwork(&pool, Some(artist), "The Dance Class", 5).await;

    let mut conn = pool.acquire().await.unwrap();
    assert_eq!(DashboardRepo::count(&mut conn, CatalogTable::Artists).await.unwrap(), 2);
    assert_eq!(DashboardRepo::count(&mut conn, CatalogTable::Artworks).await.unwrap(), 1);

    let stats = DashboardRepo::stats(&mut conn).await;
    assert_eq!(stats.artists, Some(2));
    assert_eq!(stats.artworks, Some(1));
    assert_eq!(stats.museums, Some(0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn recent_artworks_newest_first_capped_at_six(pool: PgPool) {
    let artist = insert_artist(&pool, "Morisot").await;
    for i in 0..8 {
        insert_artwork(&pool, Some(artist), &format!("Study {i}"), i).await;
    }
    insert_artwork(&pool, None, "Orphan", 100).await;

    let mut conn = pool.acquire().await.unwrap();
    let stats = DashboardRepo::stats(&mut conn).await;

    let titles: Vec<&str> = stats
        .recent_artworks
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(
        titles,
        ["Study 0", "Study 1", "Study 2", "Study 3", "Study 4", "Study 5"]
    );
    assert_eq!(stats.recent_artworks[0].artist_name.as_deref(), Some("Morisot"));
    assert_eq!(stats.artworks, Some(9));
}
