//! Handlers for artworks.
//!
//! The artist select is filled from the current artist list, and a
//! submitted artist must be one of those choices.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use museum_core::choices::{
    ARTWORK_MOVEMENTS, ARTWORK_SUBJECTS, DEFAULT_DIMENSION_UNIT, DEFAULT_WEIGHT_UNIT,
    DIMENSION_UNITS, WEIGHT_UNITS,
};
use museum_core::error::CoreError;
use museum_core::flash::Flash;
use museum_core::forms::artwork::ArtworkForm;
use museum_core::forms::{FieldErrors, IdChoice};
use museum_core::types::DbId;
use museum_db::models::artwork::ArtworkListing;
use museum_db::repositories::{ArtistRepo, ArtworkRepo};
use serde_json::json;

use super::{redirect_error, render_list, FormMode, ListQuery};
use crate::error::{statement_message, AppError, AppResult};
use crate::flash::{redirect_with, Flashes};
use crate::state::AppState;
use crate::views::{self, options, Page, Section};

const LIST: &str = "/artworks";

/// GET /artworks
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    flashes: Flashes,
) -> AppResult<Response> {
    let artworks = load_all(&state).await;
    let page = Page::new("artworks", "Artworks", Section::Artworks);
    render_list(&state, flashes, page, artworks, &query)
}

async fn load_all(state: &AppState) -> AppResult<Vec<ArtworkListing>> {
    let mut conn = state.connection().await?;
    Ok(ArtworkRepo::list(&mut conn).await?)
}

/// GET /artworks/create
pub async fn create_form(State(state): State<AppState>, flashes: Flashes) -> AppResult<Response> {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };
    let artists = match ArtistRepo::choices(&mut conn).await {
        Ok(artists) => artists,
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    };

    let form = ArtworkForm {
        dimension_unit: DEFAULT_DIMENSION_UNIT.to_string(),
        weight_unit: DEFAULT_WEIGHT_UNIT.to_string(),
        ..Default::default()
    };
    render_form(&state, &flashes, &form, &artists, &FieldErrors::default(), FormMode::Create)
}

/// POST /artworks/create
pub async fn create(
    State(state): State<AppState>,
    mut flashes: Flashes,
    Form(form): Form<ArtworkForm>,
) -> AppResult<Response> {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };
    let artists = match ArtistRepo::choices(&mut conn).await {
        Ok(artists) => artists,
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    };

    let input = match form.validate(&artists) {
        Ok(input) => input,
        Err(errors) => {
            return render_form(&state, &flashes, &form, &artists, &errors, FormMode::Create)
        }
    };

    match ArtworkRepo::create(&mut conn, &input).await {
        Ok(artwork) => {
            tracing::info!(artwork_id = artwork.id, artist_id = input.artist_id, "Artwork created");
            Ok(redirect_with(
                &state.config,
                LIST,
                Flash::success(format!("Artwork \"{}\" created successfully!", artwork.title)),
            ))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to create artwork");
            flashes.push(Flash::error(format!(
                "Error creating artwork: {}",
                statement_message(&e)
            )));
            render_form(&state, &flashes, &form, &artists, &FieldErrors::default(), FormMode::Create)
        }
    }
}

/// GET /artworks/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    flashes: Flashes,
) -> AppResult<Response> {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };

    let artwork = match ArtworkRepo::find_by_id(&mut conn, id).await {
        Ok(Some(artwork)) => artwork,
        Ok(None) => return Ok(redirect_error(&state, LIST, &not_found(id))),
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    };
    let artists = match ArtistRepo::choices(&mut conn).await {
        Ok(artists) => artists,
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    };

    render_form(
        &state,
        &flashes,
        &ArtworkForm::from(&artwork),
        &artists,
        &FieldErrors::default(),
        FormMode::Edit(id),
    )
}

/// POST /artworks/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut flashes: Flashes,
    Form(form): Form<ArtworkForm>,
) -> AppResult<Response> {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };
    match ArtworkRepo::find_by_id(&mut conn, id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(redirect_error(&state, LIST, &not_found(id))),
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    }
    let artists = match ArtistRepo::choices(&mut conn).await {
        Ok(artists) => artists,
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    };

    let input = match form.validate(&artists) {
        Ok(input) => input,
        Err(errors) => {
            return render_form(&state, &flashes, &form, &artists, &errors, FormMode::Edit(id))
        }
    };

    match ArtworkRepo::update(&mut conn, id, &input).await {
        Ok(Some(artwork)) => {
            tracing::info!(artwork_id = id, "Artwork updated");
            Ok(redirect_with(
                &state.config,
                LIST,
                Flash::success(format!("Artwork \"{}\" updated successfully!", artwork.title)),
            ))
        }
        Ok(None) => Ok(redirect_error(&state, LIST, &not_found(id))),
        Err(e) => {
            tracing::warn!(artwork_id = id, error = %e, "Failed to update artwork");
            flashes.push(Flash::error(format!(
                "Error updating artwork: {}",
                statement_message(&e)
            )));
            render_form(&state, &flashes, &form, &artists, &FieldErrors::default(), FormMode::Edit(id))
        }
    }
}

/// POST /artworks/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Response {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return redirect_error(&state, LIST, &e),
    };

    let flash = match ArtworkRepo::delete(&mut conn, id).await {
        Ok(deleted) => {
            tracing::info!(artwork_id = id, deleted, "Artwork deleted");
            Flash::success("Artwork deleted successfully!")
        }
        Err(e) => {
            tracing::warn!(artwork_id = id, error = %e, "Failed to delete artwork");
            Flash::error(format!("Error deleting artwork: {}", statement_message(&e)))
        }
    };
    redirect_with(&state.config, LIST, flash)
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artwork",
        id,
    })
}

fn render_form(
    state: &AppState,
    flashes: &Flashes,
    form: &ArtworkForm,
    artists: &[IdChoice],
    errors: &FieldErrors,
    mode: FormMode,
) -> AppResult<Response> {
    let (title, submit) = match mode {
        FormMode::Create => ("Create Artwork", "Create Artwork"),
        FormMode::Edit(_) => ("Edit Artwork", "Update Artwork"),
    };

    let body = json!({
        "form": form,
        "errors": views::field_errors(errors),
        "options": {
            "artist_id": options::ids(artists, &form.artist_id, "Select Artist"),
            "art_movement": options::choices(ARTWORK_MOVEMENTS, &form.art_movement, Some("Select Movement")),
            "subject": options::choices(ARTWORK_SUBJECTS, &form.subject, Some("Select Subject")),
            "dimension_unit": options::choices(DIMENSION_UNITS, &form.dimension_unit, None),
            "weight_unit": options::choices(WEIGHT_UNITS, &form.weight_unit, None),
        },
        "action": mode.action(LIST),
        "submit": submit,
    });

    views::render(state, flashes, Page::new("artwork_form", title, Section::Artworks).with(body))
}
