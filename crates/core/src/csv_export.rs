//! CSV serialization of a [`ResultSet`].

use crate::error::CoreError;
use crate::table::{CatalogTable, ResultSet};

/// Serialize a result set as CSV: one header row with the column names
/// followed by one line per row. `NULL` becomes an empty field.
///
/// Quoting follows standard CSV rules (fields containing the delimiter, a
/// quote or a line break are quoted, embedded quotes are doubled).
pub fn write_csv(rows: &ResultSet) -> Result<Vec<u8>, CoreError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(&rows.columns).map_err(csv_error)?;
    for row in &rows.rows {
        writer
            .write_record(row.iter().map(|v| v.as_deref().unwrap_or("")))
            .map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| CoreError::Internal(format!("CSV flush failed: {e}")))
}

/// Download file name for a table export.
pub fn export_filename(table: CatalogTable) -> String {
    format!("{table}_export.csv")
}

fn csv_error(err: csv::Error) -> CoreError {
    CoreError::Internal(format!("CSV write failed: {err}"))
}
