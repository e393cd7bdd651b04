//! Repository for the `artists` table.

use museum_core::forms::artist::ArtistInput;
use museum_core::forms::IdChoice;
use museum_core::types::DbId;
use sqlx::PgConnection;

use crate::models::artist::Artist;

/// Column list for `artists` queries.
const COLUMNS: &str = "\
    id, name, birth_date, death_date, is_living, birth_place, death_place, \
    nationality, art_movement, primary_medium, bio, website, image_url, \
    instagram, created_at";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// List every artist ordered by name.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY name, id");
        sqlx::query_as::<_, Artist>(&query).fetch_all(&mut *conn).await
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn create(
        conn: &mut PgConnection,
        input: &ArtistInput,
    ) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists \
                 (name, birth_date, death_date, is_living, birth_place, death_place, \
                  nationality, art_movement, primary_medium, bio, website, image_url, instagram) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(input.birth_date)
            .bind(input.death_date)
            .bind(input.is_living)
            .bind(&input.birth_place)
            .bind(&input.death_place)
            .bind(&input.nationality)
            .bind(&input.art_movement)
            .bind(&input.primary_medium)
            .bind(&input.bio)
            .bind(&input.website)
            .bind(&input.image_url)
            .bind(&input.instagram)
            .fetch_one(&mut *conn)
            .await
    }

    /// Replace every mutable field of an artist.
    ///
    /// Returns `None` if no row with `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &ArtistInput,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET \
                 name = $2, birth_date = $3, death_date = $4, is_living = $5, \
                 birth_place = $6, death_place = $7, nationality = $8, art_movement = $9, \
                 primary_medium = $10, bio = $11, website = $12, image_url = $13, instagram = $14 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.birth_date)
            .bind(input.death_date)
            .bind(input.is_living)
            .bind(&input.birth_place)
            .bind(&input.death_place)
            .bind(&input.nationality)
            .bind(&input.art_movement)
            .bind(&input.primary_medium)
            .bind(&input.bio)
            .bind(&input.website)
            .bind(&input.image_url)
            .bind(&input.instagram)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete an artist by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `(id, name)` pairs for the artwork form's artist select, ordered by name.
    pub async fn choices(conn: &mut PgConnection) -> Result<Vec<IdChoice>, sqlx::Error> {
        sqlx::query_as::<_, IdChoice>("SELECT id, name FROM artists ORDER BY name, id")
            .fetch_all(&mut *conn)
            .await
    }
}
