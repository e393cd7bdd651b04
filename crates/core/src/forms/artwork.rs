//! Artwork form and validated record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FieldErrors, FieldValidator, IdChoice};
use crate::choices::{
    ARTWORK_MOVEMENTS, ARTWORK_SUBJECTS, DEFAULT_DIMENSION_UNIT, DEFAULT_WEIGHT_UNIT,
    DIMENSION_UNITS, WEIGHT_UNITS,
};
use crate::types::DbId;

/// Raw artwork form submission.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtworkForm {
    pub title: String,
    pub artist_id: String,
    pub medium: String,
    pub art_movement: String,
    pub subject: String,
    pub creation_date: String,
    pub dimension_h: String,
    pub dimension_w: String,
    pub dimension_d: String,
    pub dimension_unit: String,
    pub weight: String,
    pub weight_unit: String,
    pub estimated_value: String,
    pub description: String,
    pub image_url: String,
    pub is_signed: Option<String>,
    pub signature_location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkInput {
    pub title: String,
    pub artist_id: DbId,
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
}

impl ArtworkForm {
    /// Validate against the current artist list (`artists`).
    pub fn validate(&self, artists: &[IdChoice]) -> Result<ArtworkInput, FieldErrors> {
        let mut v = FieldValidator::new();
        let input = ArtworkInput {
            title: v.required_text("title", &self.title, 200),
            artist_id: v.required_id("artist_id", &self.artist_id, artists),
            medium: v.optional_text("medium", &self.medium, 100),
            art_movement: v.optional_choice("art_movement", &self.art_movement, ARTWORK_MOVEMENTS),
            subject: v.optional_choice("subject", &self.subject, ARTWORK_SUBJECTS),
            creation_date: v.optional_date("creation_date", &self.creation_date),
            dimension_h: v.optional_amount("dimension_h", &self.dimension_h),
            dimension_w: v.optional_amount("dimension_w", &self.dimension_w),
            dimension_d: v.optional_amount("dimension_d", &self.dimension_d),
            dimension_unit: v.choice_or_default(
                "dimension_unit",
                &self.dimension_unit,
                DIMENSION_UNITS,
                DEFAULT_DIMENSION_UNIT,
            ),
            weight: v.optional_amount("weight", &self.weight),
            weight_unit: v.choice_or_default(
                "weight_unit",
                &self.weight_unit,
                WEIGHT_UNITS,
                DEFAULT_WEIGHT_UNIT,
            ),
            estimated_value: v.optional_amount("estimated_value", &self.estimated_value),
            description: v.long_text(&self.description),
            image_url: v.optional_url("image_url", &self.image_url, 255),
            is_signed: v.checkbox(&self.is_signed),
            signature_location: v.optional_text(
                "signature_location",
                &self.signature_location,
                100,
            ),
        };
        v.finish(input)
    }
}
