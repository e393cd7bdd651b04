use chrono::NaiveDate;
use museum_core::forms::museum::MuseumForm;
use museum_core::forms::to_text;
use museum_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `museums` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Museum {
    pub id: DbId,
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
    pub created_at: Timestamp,
}

impl From<&Museum> for MuseumForm {
    fn from(m: &Museum) -> Self {
        Self {
            name: m.name.clone(),
            museum_type: to_text(&m.museum_type),
            address: to_text(&m.address),
            city: m.city.clone(),
            state_province: to_text(&m.state_province),
            country: m.country.clone(),
            postal_code: to_text(&m.postal_code),
            established_date: to_text(&m.established_date),
            website: to_text(&m.website),
            phone: to_text(&m.phone),
            email: to_text(&m.email),
            description: to_text(&m.description),
            annual_visitors: to_text(&m.annual_visitors),
            admission_fee: to_text(&m.admission_fee),
        }
    }
}
