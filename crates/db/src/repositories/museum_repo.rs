//! Repository for the `museums` table.

use museum_core::forms::museum::MuseumInput;
use museum_core::forms::IdChoice;
use museum_core::types::DbId;
use sqlx::PgConnection;

use crate::models::museum::Museum;

/// Column list for `museums` queries.
const COLUMNS: &str = "\
    id, name, museum_type, address, city, state_province, country, postal_code, \
    established_date, website, phone, email, description, annual_visitors, \
    admission_fee, created_at";

/// Provides CRUD operations for museums.
pub struct MuseumRepo;

impl MuseumRepo {
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Museum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM museums ORDER BY name, id");
        sqlx::query_as::<_, Museum>(&query).fetch_all(&mut *conn).await
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Museum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM museums WHERE id = $1");
        sqlx::query_as::<_, Museum>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn create(
        conn: &mut PgConnection,
        input: &MuseumInput,
    ) -> Result<Museum, sqlx::Error> {
        let query = format!(
            "INSERT INTO museums \
                 (name, museum_type, address, city, state_province, country, postal_code, \
                  established_date, website, phone, email, description, annual_visitors, \
                  admission_fee) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Museum>(&query)
            .bind(&input.name)
            .bind(&input.museum_type)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state_province)
            .bind(&input.country)
            .bind(&input.postal_code)
            .bind(input.established_date)
            .bind(&input.website)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.description)
            .bind(input.annual_visitors)
            .bind(input.admission_fee)
            .fetch_one(&mut *conn)
            .await
    }

    /// Replace every mutable field of a museum.
    ///
    /// Returns `None` if no row with `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &MuseumInput,
    ) -> Result<Option<Museum>, sqlx::Error> {
        let query = format!(
            "UPDATE museums SET \
                 name = $2, museum_type = $3, address = $4, city = $5, state_province = $6, \
                 country = $7, postal_code = $8, established_date = $9, website = $10, \
                 phone = $11, email = $12, description = $13, annual_visitors = $14, \
                 admission_fee = $15 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Museum>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.museum_type)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state_province)
            .bind(&input.country)
            .bind(&input.postal_code)
            .bind(input.established_date)
            .bind(&input.website)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.description)
            .bind(input.annual_visitors)
            .bind(input.admission_fee)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a museum by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM museums WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `(id, name)` pairs for the collection form's museum select.
    pub async fn choices(conn: &mut PgConnection) -> Result<Vec<IdChoice>, sqlx::Error> {
        sqlx::query_as::<_, IdChoice>("SELECT id, name FROM museums ORDER BY name, id")
            .fetch_all(&mut *conn)
            .await
    }
}
