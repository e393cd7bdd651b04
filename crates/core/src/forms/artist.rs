//! Artist form and validated record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{FieldErrors, FieldValidator};
use crate::choices::{ARTIST_MEDIUMS, ARTIST_MOVEMENTS};

/// Raw artist form submission.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub birth_date: String,
    pub death_date: String,
    pub is_living: Option<String>,
    pub birth_place: String,
    pub death_place: String,
    pub nationality: String,
    pub art_movement: String,
    pub primary_medium: String,
    pub bio: String,
    pub website: String,
    pub image_url: String,
    pub instagram: String,
}

/// A validated artist ready to insert or to replace an existing row.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistInput {
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
}

impl ArtistForm {
    pub fn validate(&self) -> Result<ArtistInput, FieldErrors> {
        let mut v = FieldValidator::new();
        let input = ArtistInput {
            name: v.required_text("name", &self.name, 200),
            birth_date: v.optional_date("birth_date", &self.birth_date),
            death_date: v.optional_date("death_date", &self.death_date),
            is_living: v.checkbox(&self.is_living),
            birth_place: v.optional_text("birth_place", &self.birth_place, 100),
            death_place: v.optional_text("death_place", &self.death_place, 100),
            nationality: v.optional_text("nationality", &self.nationality, 100),
            art_movement: v.optional_choice("art_movement", &self.art_movement, ARTIST_MOVEMENTS),
            primary_medium: v.optional_choice(
                "primary_medium",
                &self.primary_medium,
                ARTIST_MEDIUMS,
            ),
            bio: v.long_text(&self.bio),
            website: v.optional_url("website", &self.website, 255),
            image_url: v.optional_url("image_url", &self.image_url, 255),
            instagram: v.optional_text("instagram", &self.instagram, 100),
        };
        v.finish(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{MSG_INVALID_CHOICE, MSG_REQUIRED};

    fn valid_form() -> ArtistForm {
        ArtistForm {
            name: "Claude Monet".into(),
            birth_date: "1840-11-14".into(),
            death_date: "1926-12-05".into(),
            birth_place: "Paris".into(),
            nationality: "French".into(),
            art_movement: "Impressionism".into(),
            primary_medium: "Painting".into(),
            website: "claude-monet.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_submission_produces_record() {
        let input = valid_form().validate().unwrap();
        assert_eq!(input.name, "Claude Monet");
        assert_eq!(input.birth_date, NaiveDate::from_ymd_opt(1840, 11, 14));
        assert!(!input.is_living);
        assert_eq!(input.death_place, None);
        assert_eq!(input.art_movement.as_deref(), Some("Impressionism"));
        assert_eq!(input.website.as_deref(), Some("https://claude-monet.com"));
        assert_eq!(input.image_url, None);
    }

    #[test]
    fn empty_name_is_rejected() {
        let form = ArtistForm {
            name: " ".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some(MSG_REQUIRED));
    }

    #[test]
    fn unknown_movement_is_rejected() {
        let form = ArtistForm {
            art_movement: "Vaporwave".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("art_movement"), Some(MSG_INVALID_CHOICE));
    }

    #[test]
    fn living_checkbox() {
        let form = ArtistForm {
            is_living: Some("y".into()),
            ..valid_form()
        };
        assert!(form.validate().unwrap().is_living);
    }

    #[test]
    fn all_problems_reported_together() {
        let form = ArtistForm {
            name: String::new(),
            birth_date: "yesterday".into(),
            instagram: "x".repeat(101),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
