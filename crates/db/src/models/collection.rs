use chrono::NaiveDate;
use museum_core::forms::collection::CollectionForm;
use museum_core::forms::{to_checkbox, to_text};
use museum_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `collections` table: one artwork held by one museum.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Collection {
    pub id: DbId,
    pub museum_id: DbId,
    pub artwork_id: DbId,
    pub accession_number: Option<String>,
    pub acquisition_date: Option<NaiveDate>,
    pub acquisition_method: String,
    pub acquisition_cost: Option<Decimal>,
    pub acquisition_details: Option<String>,
    pub donor_name: Option<String>,
    pub status: String,
    pub gallery_location: Option<String>,
    pub on_display: bool,
    pub current_value: Option<Decimal>,
    pub created_at: Timestamp,
}

/// A collection entry joined with museum name, artwork title and the
/// artwork's artist name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CollectionListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub collection: Collection,
    pub museum_name: Option<String>,
    pub artwork_title: Option<String>,
    pub artist_name: Option<String>,
}

impl From<&Collection> for CollectionForm {
    fn from(c: &Collection) -> Self {
        Self {
            museum_id: c.museum_id.to_string(),
            artwork_id: c.artwork_id.to_string(),
            accession_number: to_text(&c.accession_number),
            acquisition_date: to_text(&c.acquisition_date),
            acquisition_method: c.acquisition_method.clone(),
            acquisition_cost: to_text(&c.acquisition_cost),
            acquisition_details: to_text(&c.acquisition_details),
            donor_name: to_text(&c.donor_name),
            status: c.status.clone(),
            gallery_location: to_text(&c.gallery_location),
            on_display: to_checkbox(c.on_display),
            current_value: to_text(&c.current_value),
        }
    }
}
