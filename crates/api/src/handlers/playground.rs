//! The query console ("SQL Playground").

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use museum_core::console::QueryForm;
use museum_core::flash::Flash;
use museum_core::forms::FieldErrors;
use museum_core::table::ResultSet;
use museum_db::repositories::ConsoleRepo;
use serde_json::{json, Value};

use crate::error::{statement_message, AppResult};
use crate::flash::Flashes;
use crate::state::AppState;
use crate::views::{self, options, Page, Section};

/// GET /sql-playground
pub async fn show(State(state): State<AppState>, flashes: Flashes) -> AppResult<Response> {
    render(&state, &flashes, &QueryForm::default(), &FieldErrors::default(), None, None)
}

/// POST /sql-playground
///
/// Builds the statement from the form and runs it read-only. The statement
/// text is shown whether or not the store accepts it.
pub async fn run(
    State(state): State<AppState>,
    mut flashes: Flashes,
    Form(form): Form<QueryForm>,
) -> AppResult<Response> {
    let query = match form.validate() {
        Ok(query) => query,
        Err(errors) => return render(&state, &flashes, &form, &errors, None, None),
    };
    let sql = query.to_sql();

    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => {
            flashes.push(Flash::error(e.notice()));
            return render(&state, &flashes, &form, &FieldErrors::default(), Some(&sql), None);
        }
    };

    let result = match ConsoleRepo::run(&mut conn, &query).await {
        Ok(rows) => {
            tracing::info!(table = %query.table, rows = rows.len(), "Console query ran");
            flashes.push(Flash::success(format!("Query returned {} results", rows.len())));
            Some(rows)
        }
        Err(e) => {
            tracing::info!(%sql, error = %e, "Console query rejected");
            flashes.push(Flash::error(format!("SQL Error: {}", statement_message(&e))));
            None
        }
    };

    render(
        &state,
        &flashes,
        &form,
        &FieldErrors::default(),
        Some(&sql),
        result.as_ref(),
    )
}

fn render(
    state: &AppState,
    flashes: &Flashes,
    form: &QueryForm,
    errors: &FieldErrors,
    sql: Option<&str>,
    result: Option<&ResultSet>,
) -> AppResult<Response> {
    let body = json!({
        "form": form,
        "errors": views::field_errors(errors),
        "options": { "table": options::tables(&form.table) },
        "sql": sql,
        "result": result.map_or(Value::Null, views::result_table),
    });

    views::render(
        state,
        flashes,
        Page::new("sql_playground", "SQL Playground", Section::Playground).with(body),
    )
}
