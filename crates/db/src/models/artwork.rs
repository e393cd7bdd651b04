use chrono::NaiveDate;
use museum_core::forms::artwork::ArtworkForm;
use museum_core::forms::{to_checkbox, to_text};
use museum_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `artworks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artwork {
    pub id: DbId,
    pub title: String,
    pub artist_id: Option<DbId>,
    pub medium: Option<String>,
    pub art_movement: Option<String>,
    pub subject: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub dimension_h: Option<Decimal>,
    pub dimension_w: Option<Decimal>,
    pub dimension_d: Option<Decimal>,
    pub dimension_unit: String,
    pub weight: Option<Decimal>,
    pub weight_unit: String,
    pub estimated_value: Option<Decimal>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_signed: bool,
    pub signature_location: Option<String>,
    pub created_at: Timestamp,
}

/// An artwork joined with its artist's name for the list view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtworkListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub artwork: Artwork,
    pub artist_name: Option<String>,
}

impl From<&Artwork> for ArtworkForm {
    fn from(a: &Artwork) -> Self {
        Self {
            title: a.title.clone(),
            artist_id: to_text(&a.artist_id),
            medium: to_text(&a.medium),
            art_movement: to_text(&a.art_movement),
            subject: to_text(&a.subject),
            creation_date: to_text(&a.creation_date),
            dimension_h: to_text(&a.dimension_h),
            dimension_w: to_text(&a.dimension_w),
            dimension_d: to_text(&a.dimension_d),
            dimension_unit: a.dimension_unit.clone(),
            weight: to_text(&a.weight),
            weight_unit: a.weight_unit.clone(),
            estimated_value: to_text(&a.estimated_value),
            description: to_text(&a.description),
            image_url: to_text(&a.image_url),
            is_signed: to_checkbox(a.is_signed),
            signature_location: to_text(&a.signature_location),
        }
    }
}
