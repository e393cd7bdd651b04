//! CSV download of a whole catalog table.

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use museum_core::csv_export::{export_filename, write_csv};
use museum_core::flash::Flash;
use museum_core::table::CatalogTable;
use museum_db::repositories::ConsoleRepo;

use super::redirect_error;
use crate::error::AppError;
use crate::flash::redirect_with;
use crate::state::AppState;

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// GET /export/{table_name}
///
/// Anything outside the allow-list sends the user back to the dashboard.
/// An empty table redirects to its list view instead of downloading an
/// empty file.
pub async fn export_table(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
) -> Response {
    let Ok(table) = table_name.parse::<CatalogTable>() else {
        tracing::info!(table = %table_name, "Export of unknown table refused");
        return redirect_with(&state.config, "/", Flash::error("Invalid table name"));
    };
    let list = format!("/{table}");

    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return redirect_error(&state, "/", &e),
    };

    let rows = match ConsoleRepo::export_all(&mut conn, table).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(%table, error = %e, "Export query failed");
            return redirect_error(&state, &list, &AppError::from(e));
        }
    };

    if rows.is_empty() {
        return redirect_with(&state.config, &list, Flash::error("No data to export"));
    }

    let body = match write_csv(&rows) {
        Ok(body) => body,
        Err(e) => return redirect_error(&state, &list, &AppError::from(e)),
    };

    tracing::info!(%table, rows = rows.len(), "Exported table");
    (
        [
            (CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export_filename(table)),
            ),
        ],
        body,
    )
        .into_response()
}
