//! Route definitions for the four catalog entities.
//!
//! Every entity gets the same shape, mounted under its list path:
//!
//! ```text
//! GET    /                 -> list
//! GET    /create           -> create_form
//! POST   /create           -> create
//! GET    /{id}/edit        -> edit_form
//! POST   /{id}/edit        -> update
//! POST   /{id}/delete      -> delete
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{artists, artworks, collections, museums};
use crate::state::AppState;

/// Artist routes mounted at `/artists`.
pub fn artists_router() -> Router<AppState> {
    Router::new()
        .route("/", get(artists::list))
        .route("/create", get(artists::create_form).post(artists::create))
        .route("/{id}/edit", get(artists::edit_form).post(artists::update))
        .route("/{id}/delete", post(artists::delete))
}

/// Artwork routes mounted at `/artworks`.
pub fn artworks_router() -> Router<AppState> {
    Router::new()
        .route("/", get(artworks::list))
        .route("/create", get(artworks::create_form).post(artworks::create))
        .route("/{id}/edit", get(artworks::edit_form).post(artworks::update))
        .route("/{id}/delete", post(artworks::delete))
}

/// Museum routes mounted at `/museums`.
pub fn museums_router() -> Router<AppState> {
    Router::new()
        .route("/", get(museums::list))
        .route("/create", get(museums::create_form).post(museums::create))
        .route("/{id}/edit", get(museums::edit_form).post(museums::update))
        .route("/{id}/delete", post(museums::delete))
}

/// Collection entry routes mounted at `/collections`.
pub fn collections_router() -> Router<AppState> {
    Router::new()
        .route("/", get(collections::list))
        .route("/create", get(collections::create_form).post(collections::create))
        .route("/{id}/edit", get(collections::edit_form).post(collections::update))
        .route("/{id}/delete", post(collections::delete))
}
