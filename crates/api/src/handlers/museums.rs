//! Handlers for museums.
//!
//! Deleting a museum also removes its collection entries (cascade).

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use museum_core::choices::MUSEUM_TYPES;
use museum_core::error::CoreError;
use museum_core::flash::Flash;
use museum_core::forms::museum::MuseumForm;
use museum_core::forms::FieldErrors;
use museum_core::types::DbId;
use museum_db::models::museum::Museum;
use museum_db::repositories::MuseumRepo;
use serde_json::json;

use super::{redirect_error, render_list, FormMode, ListQuery};
use crate::error::{statement_message, AppError, AppResult};
use crate::flash::{redirect_with, Flashes};
use crate::state::AppState;
use crate::views::{self, options, Page, Section};

const LIST: &str = "/museums";

/// GET /museums
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    flashes: Flashes,
) -> AppResult<Response> {
    let museums = load_all(&state).await;
    let page = Page::new("museums", "Museums", Section::Museums);
    render_list(&state, flashes, page, museums, &query)
}

async fn load_all(state: &AppState) -> AppResult<Vec<Museum>> {
    let mut conn = state.connection().await?;
    Ok(MuseumRepo::list(&mut conn).await?)
}

/// GET /museums/create
pub async fn create_form(State(state): State<AppState>, flashes: Flashes) -> AppResult<Response> {
    render_form(
        &state,
        &flashes,
        &MuseumForm::default(),
        &FieldErrors::default(),
        FormMode::Create,
    )
}

/// POST /museums/create
pub async fn create(
    State(state): State<AppState>,
    mut flashes: Flashes,
    Form(form): Form<MuseumForm>,
) -> AppResult<Response> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return render_form(&state, &flashes, &form, &errors, FormMode::Create),
    };

    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };

    match MuseumRepo::create(&mut conn, &input).await {
        Ok(museum) => {
            tracing::info!(museum_id = museum.id, city = %museum.city, "Museum created");
            Ok(redirect_with(
                &state.config,
                LIST,
                Flash::success(format!("Museum \"{}\" created successfully!", museum.name)),
            ))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to create museum");
            flashes.push(Flash::error(format!(
                "Error creating museum: {}",
                statement_message(&e)
            )));
            render_form(&state, &flashes, &form, &FieldErrors::default(), FormMode::Create)
        }
    }
}

/// GET /museums/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    flashes: Flashes,
) -> AppResult<Response> {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };

    match MuseumRepo::find_by_id(&mut conn, id).await {
        Ok(Some(museum)) => render_form(
            &state,
            &flashes,
            &MuseumForm::from(&museum),
            &FieldErrors::default(),
            FormMode::Edit(id),
        ),
        Ok(None) => Ok(redirect_error(&state, LIST, &not_found(id))),
        Err(e) => Ok(redirect_error(&state, LIST, &AppError::from(e))),
    }
}

/// POST /museums/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut flashes: Flashes,
    Form(form): Form<MuseumForm>,
) -> AppResult<Response> {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };
    match MuseumRepo::find_by_id(&mut conn, id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(redirect_error(&state, LIST, &not_found(id))),
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return render_form(&state, &flashes, &form, &errors, FormMode::Edit(id)),
    };

    match MuseumRepo::update(&mut conn, id, &input).await {
        Ok(Some(museum)) => {
            tracing::info!(museum_id = id, "Museum updated");
            Ok(redirect_with(
                &state.config,
                LIST,
                Flash::success(format!("Museum \"{}\" updated successfully!", museum.name)),
            ))
        }
        Ok(None) => Ok(redirect_error(&state, LIST, &not_found(id))),
        Err(e) => {
            tracing::warn!(museum_id = id, error = %e, "Failed to update museum");
            flashes.push(Flash::error(format!(
                "Error updating museum: {}",
                statement_message(&e)
            )));
            render_form(&state, &flashes, &form, &FieldErrors::default(), FormMode::Edit(id))
        }
    }
}

/// POST /museums/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Response {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return redirect_error(&state, LIST, &e),
    };

    let flash = match MuseumRepo::delete(&mut conn, id).await {
        Ok(deleted) => {
            tracing::info!(museum_id = id, deleted, "Museum deleted");
            Flash::success("Museum deleted successfully!")
        }
        Err(e) => {
            tracing::warn!(museum_id = id, error = %e, "Failed to delete museum");
            Flash::error(format!("Error deleting museum: {}", statement_message(&e)))
        }
    };
    redirect_with(&state.config, LIST, flash)
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Museum",
        id,
    })
}

fn render_form(
    state: &AppState,
    flashes: &Flashes,
    form: &MuseumForm,
    errors: &FieldErrors,
    mode: FormMode,
) -> AppResult<Response> {
    let (title, submit) = match mode {
        FormMode::Create => ("Create Museum", "Create Museum"),
        FormMode::Edit(_) => ("Edit Museum", "Update Museum"),
    };

    let body = json!({
        "form": form,
        "errors": views::field_errors(errors),
        "options": {
            "museum_type": options::choices(MUSEUM_TYPES, &form.museum_type, Some("Select Type")),
        },
        "action": mode.action(LIST),
        "submit": submit,
    });

    views::render(state, flashes, Page::new("museum_form", title, Section::Museums).with(body))
}
