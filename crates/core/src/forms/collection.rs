//! Collection (artwork-at-museum) form and validated record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FieldErrors, FieldValidator, IdChoice};
use crate::choices::{ACQUISITION_METHODS, COLLECTION_STATUSES, DEFAULT_COLLECTION_STATUS};
use crate::types::DbId;

/// Raw collection form submission.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CollectionForm {
    pub museum_id: String,
    pub artwork_id: String,
    pub accession_number: String,
    pub acquisition_date: String,
    pub acquisition_method: String,
    pub acquisition_cost: String,
    pub acquisition_details: String,
    pub donor_name: String,
    pub status: String,
    pub gallery_location: String,
    pub on_display: Option<String>,
    pub current_value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionInput {
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
}

impl CollectionForm {
    /// Validate against the current museum and artwork lists.
    pub fn validate(
        &self,
        museums: &[IdChoice],
        artworks: &[IdChoice],
    ) -> Result<CollectionInput, FieldErrors> {
        let mut v = FieldValidator::new();
        let input = CollectionInput {
            museum_id: v.required_id("museum_id", &self.museum_id, museums),
            artwork_id: v.required_id("artwork_id", &self.artwork_id, artworks),
            accession_number: v.optional_text("accession_number", &self.accession_number, 50),
            acquisition_date: v.optional_date("acquisition_date", &self.acquisition_date),
            acquisition_method: v.required_choice(
                "acquisition_method",
                &self.acquisition_method,
                ACQUISITION_METHODS,
            ),
            acquisition_cost: v.optional_amount("acquisition_cost", &self.acquisition_cost),
            acquisition_details: v.long_text(&self.acquisition_details),
            donor_name: v.optional_text("donor_name", &self.donor_name, 200),
            status: v.choice_or_default(
                "status",
                &self.status,
                COLLECTION_STATUSES,
                DEFAULT_COLLECTION_STATUS,
            ),
            gallery_location: v.optional_text("gallery_location", &self.gallery_location, 100),
            on_display: v.checkbox(&self.on_display),
            current_value: v.optional_amount("current_value", &self.current_value),
        };
        v.finish(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{MSG_INVALID_CHOICE, MSG_REQUIRED};

    fn museums() -> Vec<IdChoice> {
        vec![(10, "Louvre".into())]
    }

    fn artworks() -> Vec<IdChoice> {
        vec![(20, "Mona Lisa".into())]
    }

    fn valid_form() -> CollectionForm {
        CollectionForm {
            museum_id: "10".into(),
            artwork_id: "20".into(),
            accession_number: "INV 779".into(),
            acquisition_method: "Purchase".into(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_applied() {
        let input = valid_form().validate(&museums(), &artworks()).unwrap();
        assert_eq!(input.status, "Active");
        assert!(!input.on_display);
        assert_eq!(input.museum_id, 10);
        assert_eq!(input.artwork_id, 20);
    }

    #[test]
    fn acquisition_method_required() {
        let form = CollectionForm {
            acquisition_method: String::new(),
            ..valid_form()
        };
        let errors = form.validate(&museums(), &artworks()).unwrap_err();
        assert_eq!(errors.get("acquisition_method"), Some(MSG_REQUIRED));
    }

    #[test]
    fn status_must_be_known() {
        let form = CollectionForm {
            status: "Lost".into(),
            ..valid_form()
        };
        let errors = form.validate(&museums(), &artworks()).unwrap_err();
        assert_eq!(errors.get("status"), Some(MSG_INVALID_CHOICE));
    }

    #[test]
    fn references_must_be_listed() {
        let form = CollectionForm {
            museum_id: "11".into(),
            artwork_id: String::new(),
            ..valid_form()
        };
        let errors = form.validate(&museums(), &artworks()).unwrap_err();
        assert_eq!(errors.get("museum_id"), Some(MSG_INVALID_CHOICE));
        assert_eq!(errors.get("artwork_id"), Some(MSG_REQUIRED));
    }

    #[test]
    fn on_display_checkbox() {
        let form = CollectionForm {
            on_display: Some("y".into()),
            status: "On Loan".into(),
            ..valid_form()
        };
        let input = form.validate(&museums(), &artworks()).unwrap();
        assert!(input.on_display);
        assert_eq!(input.status, "On Loan");
    }
}
