//! Request handlers.
//!
//! Each handler acquires at most one pooled connection for the whole
//! request. Recoverable failures become flash notices: list pages render
//! empty, form pages redirect back to their list.

pub mod artists;
pub mod artworks;
pub mod collections;
pub mod dashboard;
pub mod export;
pub mod health;
pub mod museums;
pub mod playground;

use axum::response::Response;
use museum_core::flash::Flash;
use museum_core::types::DbId;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::ITEMS_PER_PAGE;
use crate::error::{AppError, AppResult};
use crate::flash::{redirect_with, Flashes};
use crate::state::AppState;
use crate::views::pagination::{page_number, paginate};
use crate::views::{self, Page};

/// Query string accepted by list pages.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
}

/// Whether a form page creates a new row or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(DbId),
}

impl FormMode {
    /// Form action under the entity's base path (e.g. `/artists`).
    pub fn action(self, base: &str) -> String {
        match self {
            FormMode::Create => format!("{base}/create"),
            FormMode::Edit(id) => format!("{base}/{id}/edit"),
        }
    }
}

/// Render one page of a list view. A failed load shows an empty list and
/// the error as a notice.
pub fn render_list<T: Serialize>(
    state: &AppState,
    mut flashes: Flashes,
    page: Page,
    rows: AppResult<Vec<T>>,
    query: &ListQuery,
) -> AppResult<Response> {
    let rows = rows.unwrap_or_else(|e| {
        if !matches!(e, AppError::Connection(_)) {
            tracing::error!(error = %e, template = page.template, "Failed to load list");
        }
        flashes.push(Flash::error(e.notice()));
        Vec::new()
    });

    let (rows, pager) = paginate(rows, page_number(query.page.as_deref()), ITEMS_PER_PAGE);
    views::render(state, &flashes, page.with(json!({ "rows": rows, "pager": pager })))
}

/// Redirect to `to` with the error's notice.
pub fn redirect_error(state: &AppState, to: &str, err: &AppError) -> Response {
    redirect_with(&state.config, to, Flash::error(err.notice()))
}
