//! Conversion of dynamically shaped rows into a [`ResultSet`].

use museum_core::table::ResultSet;
use sqlx::postgres::types::PgInterval;
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Collect rows into a [`ResultSet`]. Column names come from the first row.
pub fn to_result_set(rows: &[PgRow]) -> ResultSet {
    let columns = rows
        .first()
        .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
        .unwrap_or_default();

    ResultSet {
        columns,
        rows: rows.iter().map(row_values).collect(),
    }
}

/// Render every column of `row` as text, by ordinal so duplicate column
/// names (e.g. `SELECT id, id`) stay distinct.
fn row_values(row: &PgRow) -> Vec<Option<String>> {
    row.columns()
        .iter()
        .map(|column| cell_text(row, column.ordinal(), column.type_info().name()))
        .collect()
}

fn cell_text(row: &PgRow, idx: usize, type_name: &str) -> Option<String> {
    match type_name {
        "INT2" => text::<i16>(row, idx),
        "INT4" => text::<i32>(row, idx),
        "INT8" => text::<i64>(row, idx),
        "FLOAT4" => text::<f32>(row, idx),
        "FLOAT8" => text::<f64>(row, idx),
        "NUMERIC" => {
            text::<rust_decimal::Decimal>(row, idx).or_else(|| raw_text(row, idx, type_name))
        }
        "BOOL" => text::<bool>(row, idx),
        "DATE" => text::<chrono::NaiveDate>(row, idx),
        "TIME" => text::<chrono::NaiveTime>(row, idx),
        "TIMESTAMP" => text::<chrono::NaiveDateTime>(row, idx),
        "TIMESTAMPTZ" => row
            .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(idx)
            .ok()
            .flatten()
            .map(|dt| dt.to_rfc3339()),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => text::<String>(row, idx),
        "UUID" => text::<uuid::Uuid>(row, idx),
        "JSON" | "JSONB" => text::<serde_json::Value>(row, idx),
        "INTERVAL" => row
            .try_get::<Option<PgInterval>, _>(idx)
            .ok()
            .flatten()
            .map(|iv| interval_text(&iv)),
        "INT2[]" => array_text::<i16>(row, idx),
        "INT4[]" => array_text::<i32>(row, idx),
        "INT8[]" => array_text::<i64>(row, idx),
        "FLOAT8[]" => array_text::<f64>(row, idx),
        "BOOL[]" => array_text::<bool>(row, idx),
        "TEXT[]" | "VARCHAR[]" => array_text::<String>(row, idx),
        other => raw_text(row, idx, other),
    }
}

fn text<T>(row: &PgRow, idx: usize) -> Option<String>
where
    T: ToString + for<'r> sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get::<Option<T>, _>(idx)
        .ok()
        .flatten()
        .map(|v| v.to_string())
}

/// Render a one-dimensional array the way `psql` prints it: `{1,2,NULL}`.
fn array_text<T>(row: &PgRow, idx: usize) -> Option<String>
where
    T: ToString + for<'r> sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
    Vec<Option<T>>: for<'r> sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    let items = row.try_get::<Option<Vec<Option<T>>>, _>(idx).ok().flatten()?;
    let parts: Vec<String> = items
        .iter()
        .map(|item| item.as_ref().map_or_else(|| "NULL".to_string(), ToString::to_string))
        .collect();
    Some(format!("{{{}}}", parts.join(",")))
}

/// Postgres-style interval text, e.g. `1 year 2 mons 3 days 04:05:06`.
fn interval_text(iv: &PgInterval) -> String {
    let mut parts = Vec::new();
    let (years, months) = (iv.months / 12, iv.months % 12);
    for (n, unit) in [(years, "year"), (months, "mon"), (iv.days, "day")] {
        if n != 0 {
            let plural = if n.abs() == 1 { "" } else { "s" };
            parts.push(format!("{n} {unit}{plural}"));
        }
    }

    if iv.microseconds != 0 || parts.is_empty() {
        let sign = if iv.microseconds < 0 { "-" } else { "" };
        let total = iv.microseconds.unsigned_abs();
        let micros = total % 1_000_000;
        let secs = total / 1_000_000;
        let mut clock = format!("{sign}{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60);
        if micros != 0 {
            clock.push_str(&format!(".{micros:06}"));
        }
        parts.push(clock);
    }
    parts.join(" ")
}

/// Fallback for types without a dedicated decoder. NULL stays `None`; a
/// value that is not readable text is shown as its type name so it never
/// looks like NULL.
fn raw_text(row: &PgRow, idx: usize, type_name: &str) -> Option<String> {
    let value = row.try_get_raw(idx).ok()?;
    if value.is_null() {
        return None;
    }
    match value.as_str() {
        Ok(s) if !s.chars().any(char::is_control) => Some(s.to_string()),
        _ => {
            tracing::debug!(column = idx, type_name, "Unsupported column type");
            Some(format!("<{}>", type_name.to_ascii_lowercase()))
        }
    }
}
