//! Repository for the `artworks` table.

use museum_core::forms::artwork::ArtworkInput;
use museum_core::forms::IdChoice;
use museum_core::types::DbId;
use sqlx::PgConnection;

use crate::models::artwork::{Artwork, ArtworkListing};

/// Column list for `artworks` queries.
const COLUMNS: &str = "\
    id, title, artist_id, medium, art_movement, subject, creation_date, \
    dimension_h, dimension_w, dimension_d, dimension_unit, weight, weight_unit, \
    estimated_value, description, image_url, is_signed, signature_location, created_at";

/// The same columns qualified with the `a` alias, for joined queries.
const QUALIFIED_COLUMNS: &str = "\
    a.id, a.title, a.artist_id, a.medium, a.art_movement, a.subject, a.creation_date, \
    a.dimension_h, a.dimension_w, a.dimension_d, a.dimension_unit, a.weight, a.weight_unit, \
    a.estimated_value, a.description, a.image_url, a.is_signed, a.signature_location, \
    a.created_at";

/// Provides CRUD operations for artworks.
pub struct ArtworkRepo;

impl ArtworkRepo {
    /// List every artwork with its artist's name, ordered by title.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<ArtworkListing>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS}, ar.name AS artist_name \
             FROM artworks a \
             LEFT JOIN artists ar ON a.artist_id = ar.id \
             ORDER BY a.title, a.id"
        );
        sqlx::query_as::<_, ArtworkListing>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artworks WHERE id = $1");
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn create(
        conn: &mut PgConnection,
        input: &ArtworkInput,
    ) -> Result<Artwork, sqlx::Error> {
        let query = format!(
            "INSERT INTO artworks \
                 (title, artist_id, medium, art_movement, subject, creation_date, \
                  dimension_h, dimension_w, dimension_d, dimension_unit, weight, weight_unit, \
                  estimated_value, description, image_url, is_signed, signature_location) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(&input.title)
            .bind(input.artist_id)
            .bind(&input.medium)
            .bind(&input.art_movement)
            .bind(&input.subject)
            .bind(input.creation_date)
            .bind(input.dimension_h)
            .bind(input.dimension_w)
            .bind(input.dimension_d)
            .bind(&input.dimension_unit)
            .bind(input.weight)
            .bind(&input.weight_unit)
            .bind(input.estimated_value)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.is_signed)
            .bind(&input.signature_location)
            .fetch_one(&mut *conn)
            .await
    }

    /// Replace every mutable field of an artwork.
    ///
    /// Returns `None` if no row with `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &ArtworkInput,
    ) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!(
            "UPDATE artworks SET \
                 title = $2, artist_id = $3, medium = $4, art_movement = $5, subject = $6, \
                 creation_date = $7, dimension_h = $8, dimension_w = $9, dimension_d = $10, \
                 dimension_unit = $11, weight = $12, weight_unit = $13, estimated_value = $14, \
                 description = $15, image_url = $16, is_signed = $17, signature_location = $18 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.artist_id)
            .bind(&input.medium)
            .bind(&input.art_movement)
            .bind(&input.subject)
            .bind(input.creation_date)
            .bind(input.dimension_h)
            .bind(input.dimension_w)
            .bind(input.dimension_d)
            .bind(&input.dimension_unit)
            .bind(input.weight)
            .bind(&input.weight_unit)
            .bind(input.estimated_value)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.is_signed)
            .bind(&input.signature_location)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete an artwork by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `(id, title)` pairs for the collection form's artwork select.
    pub async fn choices(conn: &mut PgConnection) -> Result<Vec<IdChoice>, sqlx::Error> {
        sqlx::query_as::<_, IdChoice>("SELECT id, title FROM artworks ORDER BY title, id")
            .fetch_all(&mut *conn)
            .await
    }
}
