//! Museum form and validated record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FieldErrors, FieldValidator};
use crate::choices::MUSEUM_TYPES;

/// Raw museum form submission.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MuseumForm {
    pub name: String,
    pub museum_type: String,
    pub address: String,
    pub city: String,
    pub state_province: String,
    pub country: String,
    pub postal_code: String,
    pub established_date: String,
    pub website: String,
    pub phone: String,
    pub email: String,
    pub description: String,
    pub annual_visitors: String,
    pub admission_fee: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MuseumInput {
    pub name: String,
    pub museum_type: Option<String>,
    pub address: Option<String>,
    pub city: String,
    pub state_province: Option<String>,
    pub country: String,
    pub postal_code: Option<String>,
    pub established_date: Option<NaiveDate>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub annual_visitors: Option<i32>,
    pub admission_fee: Option<Decimal>,
}

impl MuseumForm {
    pub fn validate(&self) -> Result<MuseumInput, FieldErrors> {
        let mut v = FieldValidator::new();
        let input = MuseumInput {
            name: v.required_text("name", &self.name, 100),
            museum_type: v.optional_choice("museum_type", &self.museum_type, MUSEUM_TYPES),
            address: v.optional_text("address", &self.address, 200),
            city: v.required_text("city", &self.city, 100),
            state_province: v.optional_text("state_province", &self.state_province, 100),
            country: v.required_text("country", &self.country, 100),
            postal_code: v.optional_text("postal_code", &self.postal_code, 20),
            established_date: v.optional_date("established_date", &self.established_date),
            website: v.optional_url("website", &self.website, 200),
            phone: v.optional_text("phone", &self.phone, 20),
            email: v.optional_text("email", &self.email, 100),
            description: v.long_text(&self.description),
            annual_visitors: v.optional_count("annual_visitors", &self.annual_visitors),
            admission_fee: v.optional_amount("admission_fee", &self.admission_fee),
        };
        v.finish(input)
    }
}
