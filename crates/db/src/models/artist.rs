use chrono::NaiveDate;
use museum_core::forms::artist::ArtistForm;
use museum_core::forms::{to_checkbox, to_text};
use museum_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub is_living: bool,
    pub birth_place: Option<String>,
    pub death_place: Option<String>,
    pub nationality: Option<String>,
    pub art_movement: Option<String>,
    pub primary_medium: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub image_url: Option<String>,
    pub instagram: Option<String>,
    pub created_at: Timestamp,
}

impl From<&Artist> for ArtistForm {
    fn from(a: &Artist) -> Self {
        Self {
            name: a.name.clone(),
            birth_date: to_text(&a.birth_date),
            death_date: to_text(&a.death_date),
            is_living: to_checkbox(a.is_living),
            birth_place: to_text(&a.birth_place),
            death_place: to_text(&a.death_place),
            nationality: to_text(&a.nationality),
            art_movement: to_text(&a.art_movement),
            primary_medium: to_text(&a.primary_medium),
            bio: to_text(&a.bio),
            website: to_text(&a.website),
            image_url: to_text(&a.image_url),
            instagram: to_text(&a.instagram),
        }
    }
}
