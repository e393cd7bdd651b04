//! Handlers for collection entries (an artwork held by a museum).

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use museum_core::choices::{ACQUISITION_METHODS, COLLECTION_STATUSES, DEFAULT_COLLECTION_STATUS};
use museum_core::error::CoreError;
use museum_core::flash::Flash;
use museum_core::forms::collection::CollectionForm;
use museum_core::forms::{FieldErrors, IdChoice};
use museum_core::types::DbId;
use museum_db::models::collection::CollectionListing;
use museum_db::repositories::{ArtworkRepo, CollectionRepo, MuseumRepo};
use serde_json::json;
use sqlx::PgConnection;

use super::{redirect_error, render_list, FormMode, ListQuery};
use crate::error::{statement_message, AppError, AppResult};
use crate::flash::{redirect_with, Flashes};
use crate::state::AppState;
use crate::views::{self, options, Page, Section};

const LIST: &str = "/collections";

/// Select-box sources for the collection form.
struct Related {
    museums: Vec<IdChoice>,
    artworks: Vec<IdChoice>,
}

impl Related {
    async fn load(conn: &mut PgConnection) -> Result<Self, sqlx::Error> {
        let museums = MuseumRepo::choices(conn).await?;
        let artworks = ArtworkRepo::choices(conn).await?;
        Ok(Self { museums, artworks })
    }
}

/// GET /collections
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    flashes: Flashes,
) -> AppResult<Response> {
    let entries = load_all(&state).await;
    let page = Page::new("collections", "Collections", Section::Collections);
    render_list(&state, flashes, page, entries, &query)
}

async fn load_all(state: &AppState) -> AppResult<Vec<CollectionListing>> {
    let mut conn = state.connection().await?;
    Ok(CollectionRepo::list(&mut conn).await?)
}

/// GET /collections/create
pub async fn create_form(State(state): State<AppState>, flashes: Flashes) -> AppResult<Response> {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };
    let related = match Related::load(&mut conn).await {
        Ok(related) => related,
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    };

    let form = CollectionForm {
        status: DEFAULT_COLLECTION_STATUS.to_string(),
        ..Default::default()
    };
    render_form(&state, &flashes, &form, &related, &FieldErrors::default(), FormMode::Create)
}

/// POST /collections/create
pub async fn create(
    State(state): State<AppState>,
    mut flashes: Flashes,
    Form(form): Form<CollectionForm>,
) -> AppResult<Response> {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };
    let related = match Related::load(&mut conn).await {
        Ok(related) => related,
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    };

    let input = match form.validate(&related.museums, &related.artworks) {
        Ok(input) => input,
        Err(errors) => {
            return render_form(&state, &flashes, &form, &related, &errors, FormMode::Create)
        }
    };

    match CollectionRepo::create(&mut conn, &input).await {
        Ok(entry) => {
            tracing::info!(
                collection_id = entry.id,
                museum_id = input.museum_id,
                artwork_id = input.artwork_id,
                "Collection entry created"
            );
            Ok(redirect_with(
                &state.config,
                LIST,
                Flash::success("Collection entry created successfully!"),
            ))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to create collection entry");
            flashes.push(Flash::error(format!(
                "Error creating collection entry: {}",
                statement_message(&e)
            )));
            render_form(&state, &flashes, &form, &related, &FieldErrors::default(), FormMode::Create)
        }
    }
}

/// GET /collections/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    flashes: Flashes,
) -> AppResult<Response> {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };

    let entry = match CollectionRepo::find_by_id(&mut conn, id).await {
        Ok(Some(entry)) => entry,
        Ok(None) => return Ok(redirect_error(&state, LIST, &not_found(id))),
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    };
    let related = match Related::load(&mut conn).await {
        Ok(related) => related,
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    };

    render_form(
        &state,
        &flashes,
        &CollectionForm::from(&entry),
        &related,
        &FieldErrors::default(),
        FormMode::Edit(id),
    )
}

/// POST /collections/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut flashes: Flashes,
    Form(form): Form<CollectionForm>,
) -> AppResult<Response> {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return Ok(redirect_error(&state, LIST, &e)),
    };
    match CollectionRepo::find_by_id(&mut conn, id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(redirect_error(&state, LIST, &not_found(id))),
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    }
    let related = match Related::load(&mut conn).await {
        Ok(related) => related,
        Err(e) => return Ok(redirect_error(&state, LIST, &AppError::from(e))),
    };

    let input = match form.validate(&related.museums, &related.artworks) {
        Ok(input) => input,
        Err(errors) => {
            return render_form(&state, &flashes, &form, &related, &errors, FormMode::Edit(id))
        }
    };

    match CollectionRepo::update(&mut conn, id, &input).await {
        Ok(Some(_)) => {
            tracing::info!(collection_id = id, "Collection entry updated");
            Ok(redirect_with(
                &state.config,
                LIST,
                Flash::success("Collection entry updated successfully!"),
            ))
        }
        Ok(None) => Ok(redirect_error(&state, LIST, &not_found(id))),
        Err(e) => {
            tracing::warn!(collection_id = id, error = %e, "Failed to update collection entry");
            flashes.push(Flash::error(format!(
                "Error updating collection entry: {}",
                statement_message(&e)
            )));
            render_form(&state, &flashes, &form, &related, &FieldErrors::default(), FormMode::Edit(id))
        }
    }
}

/// POST /collections/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Response {
    let mut conn = match state.connection().await {
        Ok(conn) => conn,
        Err(e) => return redirect_error(&state, LIST, &e),
    };

    let flash = match CollectionRepo::delete(&mut conn, id).await {
        Ok(deleted) => {
            tracing::info!(collection_id = id, deleted, "Collection entry deleted");
            Flash::success("Collection entry deleted successfully!")
        }
        Err(e) => {
            tracing::warn!(collection_id = id, error = %e, "Failed to delete collection entry");
            Flash::error(format!(
                "Error deleting collection entry: {}",
                statement_message(&e)
            ))
        }
    };
    redirect_with(&state.config, LIST, flash)
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Collection entry",
        id,
    })
}

fn render_form(
    state: &AppState,
    flashes: &Flashes,
    form: &CollectionForm,
    related: &Related,
    errors: &FieldErrors,
    mode: FormMode,
) -> AppResult<Response> {
    let (title, submit) = match mode {
        FormMode::Create => ("Add Artwork to Collection", "Add to Collection"),
        FormMode::Edit(_) => ("Edit Collection Entry", "Update Collection Entry"),
    };

    let body = json!({
        "form": form,
        "errors": views::field_errors(errors),
        "options": {
            "museum_id": options::ids(&related.museums, &form.museum_id, "Select Museum"),
            "artwork_id": options::ids(&related.artworks, &form.artwork_id, "Select Artwork"),
            "acquisition_method": options::choices(ACQUISITION_METHODS, &form.acquisition_method, Some("Select Method")),
            "status": options::choices(COLLECTION_STATUSES, &form.status, None),
        },
        "action": mode.action(LIST),
        "submit": submit,
    });

    views::render(state, flashes, Page::new("collection_form", title, Section::Collections).with(body))
}
