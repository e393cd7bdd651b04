//! Handlers for artists.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use museum_core::choices::{ARTIST_MEDIUMS, ARTIST_MOVEMENTS};
use museum_core::error::CoreError;
use museum_core::flash::Flash;
use museum_core::forms::artist::ArtistForm;
use museum_core::forms::FieldErrors;
use museum_core::types::DbId;
use museum_db::models::artist::Artist;
use museum_db::repositories::ArtistRepo;
use serde_json::json;

use super::{redirect_error, render_list, FormMode, ListQuery};
use crate::error::{statement_message, AppError, AppResult};
use crate::flash::{redirect_with, Flashes};
use crate::state::AppState;
use crate::views::{self, options, Page, Section};

const LIST: &str = "/artists";

/// GET /artists
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    flashes: Flashes,
) -> AppResult<Response> {
    let artists = load_all(&state).await;
    let page = Page::new("artists", "Artists", Section::Artists);
    render_list(&state, flashes, page, artists, &query)
}

async fn load_all(state: &AppState) -> AppResult<Vec<Artist>> {
    let mut conn = state.connection().await?;
    Ok(ArtistRepo::list(&mut conn).await?)
}

/// GET /artists/create
pub async fn create_form(State(state): State<AppState>, flashes: Flashes) -> AppResult<Response> {
    render_form(
        &state,
        &flashes,
        &ArtistForm::default(),
        &FieldErrors::default(),
        FormMode::Create,
    )
}

/// POST /artists/create
pub async fn create(
    State(state): State<AppState>,
    mut flashes: Flashes,
    Form(form): Form<ArtistForm>,
) -> AppResult<Response> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return render_form(&state, &flashes, &form, &errors, FormMode::Create),
    };

    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };

    match ArtistRepo::create(&mut conn, &input).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");
            Ok(redirect_with(
                &state.config,
                LIST,
                Flash::success(format!("Artist \"{}\" created successfully!", artist.name)),
            ))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to create artist");
            flashes.push(Flash::error(format!(
                "Error creating artist: {}",
                statement_message(&e)
            )));
            render_form(&state, &flashes, &form, &FieldErrors::default(), FormMode::Create)
        }
    }
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    flashes: Flashes,
) -> AppResult<Response> {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };

    match ArtistRepo::find_by_id(&mut conn, id).await {
        Ok(Some(artist)) => render_form(
            &state,
            &flashes,
            &ArtistForm::from(&artist),
            &FieldErrors::default(),
            FormMode::Edit(id),
        ),
        Ok(None) => Ok(redirect_error(&state, LIST, &not_found(id))),
        Err(e) => Ok(redirect_error(&state, LIST, &AppError::from(e))),
    }
}

/// POST /artists/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut flashes: Flashes,
    Form(form): Form<ArtistForm>,
) -> AppResult<Response> {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };
    match ArtistRepo::find_by_id(&mut conn, id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(redirect_error(&state, LIST, &not_found(id))),
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    }

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return render_form(&state, &flashes, &form, &errors, FormMode::Edit(id)),
    };

    match ArtistRepo::update(&mut conn, id, &input).await {
        Ok(Some(artist)) => {
            tracing::info!(artist_id = id, "Artist updated");
            Ok(redirect_with(
                &state.config,
                LIST,
                Flash::success(format!("Artist \"{}\" updated successfully!", artist.name)),
            ))
        }
        Ok(None) => Ok(redirect_error(&state, LIST, &not_found(id))),
        Err(e) => {
            tracing::warn!(artist_id = id, error = %e, "Failed to update artist");
            flashes.push(Flash::error(format!(
                "Error updating artist: {}",
                statement_message(&e)
            )));
            render_form(&state, &flashes, &form, &FieldErrors::default(), FormMode::Edit(id))
        }
    }
}

/// POST /artists/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Response {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return redirect_error(&state, LIST, &e),
    };

    let flash = match ArtistRepo::delete(&mut conn, id).await {
        Ok(deleted) => {
            tracing::info!(artist_id = id, deleted, "Artist deleted");
            Flash::success("Artist deleted successfully!")
        }
        Err(e) => {
            tracing::warn!(artist_id = id, error = %e, "Failed to delete artist");
            Flash::error(format!("Error deleting artist: {}", statement_message(&e)))
        }
    };
    redirect_with(&state.config, LIST, flash)
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id,
    })
}

fn render_form(
    state: &AppState,
    flashes: &Flashes,
    form: &ArtistForm,
    errors: &FieldErrors,
    mode: FormMode,
) -> AppResult<Response> {
    let (title, submit) = match mode {
        FormMode::Create => ("Create Artist", "Create Artist"),
        FormMode::Edit(_) => ("Edit Artist", "Update Artist"),
    };

    let body = json!({
        "form": form,
        "errors": views::field_errors(errors),
        "options": {
            "art_movement": options::choices(ARTIST_MOVEMENTS, &form.art_movement, Some("Select Movement")),
            "primary_medium": options::choices(ARTIST_MEDIUMS, &form.primary_medium, Some("Select Medium")),
        },
        "action": mode.action(LIST),
        "submit": submit,
    });

    views::render(state, flashes, Page::new("artist_form", title, Section::Artists).with(body))
}
