//! Repository for the `collections` join table.

use museum_core::forms::collection::CollectionInput;
use museum_core::types::DbId;
use sqlx::PgConnection;

use crate::models::collection::{Collection, CollectionListing};

/// Column list for `collections` queries.
const COLUMNS: &str = "\
    id, museum_id, artwork_id, accession_number, acquisition_date, acquisition_method, \
    acquisition_cost, acquisition_details, donor_name, status, gallery_location, \
    on_display, current_value, created_at";

const QUALIFIED_COLUMNS: &str = "\
    c.id, c.museum_id, c.artwork_id, c.accession_number, c.acquisition_date, \
    c.acquisition_method, c.acquisition_cost, c.acquisition_details, c.donor_name, \
    c.status, c.gallery_location, c.on_display, c.current_value, c.created_at";

/// Provides CRUD operations for collection entries.
pub struct CollectionRepo;

impl CollectionRepo {
    /// List every entry, newest first, with museum name, artwork title and
    /// the artwork's artist name.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<CollectionListing>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS}, \
                    m.name AS museum_name, a.title AS artwork_title, ar.name AS artist_name \
             FROM collections c \
             LEFT JOIN museums m ON c.museum_id = m.id \
             LEFT JOIN artworks a ON c.artwork_id = a.id \
             LEFT JOIN artists ar ON a.artist_id = ar.id \
             ORDER BY c.id DESC"
        );
        sqlx::query_as::<_, CollectionListing>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Collection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collections WHERE id = $1");
        sqlx::query_as::<_, Collection>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn create(
        conn: &mut PgConnection,
        input: &CollectionInput,
    ) -> Result<Collection, sqlx::Error> {
        let query = format!(
            "INSERT INTO collections \
                 (museum_id, artwork_id, accession_number, acquisition_date, acquisition_method, \
                  acquisition_cost, acquisition_details, donor_name, status, gallery_location, \
                  on_display, current_value) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collection>(&query)
            .bind(input.museum_id)
            .bind(input.artwork_id)
            .bind(&input.accession_number)
            .bind(input.acquisition_date)
            .bind(&input.acquisition_method)
            .bind(input.acquisition_cost)
            .bind(&input.acquisition_details)
            .bind(&input.donor_name)
            .bind(&input.status)
            .bind(&input.gallery_location)
            .bind(input.on_display)
            .bind(input.current_value)
            .fetch_one(&mut *conn)
            .await
    }

    /// Replace every mutable field of a collection entry.
    ///
    /// Returns `None` if no row with `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &CollectionInput,
    ) -> Result<Option<Collection>, sqlx::Error> {
        let query = format!(
            "UPDATE collections SET \
                 museum_id = $2, artwork_id = $3, accession_number = $4, acquisition_date = $5, \
                 acquisition_method = $6, acquisition_cost = $7, acquisition_details = $8, \
                 donor_name = $9, status = $10, gallery_location = $11, on_display = $12, \
                 current_value = $13 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collection>(&query)
            .bind(id)
            .bind(input.museum_id)
            .bind(input.artwork_id)
            .bind(&input.accession_number)
            .bind(input.acquisition_date)
            .bind(&input.acquisition_method)
            .bind(input.acquisition_cost)
            .bind(&input.acquisition_details)
            .bind(&input.donor_name)
            .bind(&input.status)
            .bind(&input.gallery_location)
            .bind(input.on_display)
            .bind(input.current_value)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a collection entry by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM collections WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
