//! Query console ("SQL Playground") statement composition.
//!
//! The console assembles exactly one `SELECT` from a table picked from the
//! [`CatalogTable`] allow-list plus free-text column, `WHERE` and
//! `ORDER BY` fragments. Only the table name and the limit are checked; the
//! fragments are passed through verbatim. The store is expected to run the
//! statement read-only.

use serde::{Deserialize, Serialize};

use crate::forms::{FieldErrors, MSG_INVALID_INTEGER, MSG_REQUIRED};
use crate::table::CatalogTable;

pub const DEFAULT_LIMIT: u32 = 50;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 1000;
pub const DEFAULT_COLUMNS: &str = "*";

/// Raw console form submission.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryForm {
    pub table: String,
    pub columns: String,
    pub where_clause: String,
    pub order_by: String,
    pub limit: String,
}

impl Default for QueryForm {
    fn default() -> Self {
        Self {
            table: CatalogTable::Artists.as_str().to_string(),
            columns: DEFAULT_COLUMNS.to_string(),
            where_clause: String::new(),
            order_by: String::new(),
            limit: DEFAULT_LIMIT.to_string(),
        }
    }
}

/// A validated console request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleQuery {
    pub table: CatalogTable,
    pub columns: String,
    pub where_clause: Option<String>,
    pub order_by: Option<String>,
    pub limit: u32,
}

impl QueryForm {
    pub fn validate(&self) -> Result<ConsoleQuery, FieldErrors> {
        let mut errors = FieldErrors::default();

        let table = match self.table.parse::<CatalogTable>() {
            Ok(table) => Some(table),
            Err(_) => {
                errors.push("table", "Not a valid choice.");
                None
            }
        };

        let columns = self.columns.trim();
        if columns.is_empty() {
            errors.push("columns", MSG_REQUIRED);
        }

        let limit = match parse_limit(&self.limit) {
            Ok(limit) => limit,
            Err(message) => {
                errors.push("limit", message);
                DEFAULT_LIMIT
            }
        };

        match table {
            Some(table) if errors.is_empty() => Ok(ConsoleQuery {
                table,
                columns: columns.to_string(),
                where_clause: non_blank(&self.where_clause),
                order_by: non_blank(&self.order_by),
                limit,
            }),
            _ => Err(errors),
        }
    }
}

impl ConsoleQuery {
    /// The statement text, exactly as it will be executed and displayed.
    pub fn to_sql(&self) -> String {
        let mut sql = format!("SELECT {} FROM {}", self.columns, self.table);
        if let Some(where_clause) = &self.where_clause {
            sql.push_str(" WHERE ");
            sql.push_str(where_clause);
        }
        if let Some(order_by) = &self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }
        sql.push_str(&format!(" LIMIT {}", self.limit));
        sql
    }
}

fn parse_limit(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_LIMIT);
    }
    let value: i64 = raw.parse().map_err(|_| MSG_INVALID_INTEGER.to_string())?;
    if !(i64::from(MIN_LIMIT)..=i64::from(MAX_LIMIT)).contains(&value) {
        return Err(format!(
            "Number must be between {MIN_LIMIT} and {MAX_LIMIT}."
        ));
    }
    Ok(value as u32)
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
