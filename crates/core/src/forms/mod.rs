//! Entity form validation.
//!
//! Each entity has a raw `*Form` struct deserialized straight from a
//! urlencoded body (every field is text, checkboxes are present-or-absent)
//! and a typed `*Input` record ready for persistence. `validate` converts
//! the former into the latter or returns every field-level problem at once.

pub mod artist;
pub mod artwork;
pub mod collection;
pub mod museum;

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::choices::{is_valid_choice, Choice};
use crate::types::DbId;
use crate::url::{is_well_formed, normalize_url};

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_INVALID_CHOICE: &str = "Not a valid choice.";
pub const MSG_INVALID_DATE: &str = "Not a valid date value (expected YYYY-MM-DD).";
pub const MSG_INVALID_DECIMAL: &str = "Not a valid decimal value.";
pub const MSG_INVALID_INTEGER: &str = "Not a valid integer value.";
pub const MSG_NEGATIVE: &str = "Number must be at least 0.";
pub const MSG_INVALID_URL: &str = "Invalid URL.";

/// A select-box option backed by a database row: `(id, label)`.
pub type IdChoice = (DbId, String);

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// A single field-level rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All rejections produced by one form submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

// ---------------------------------------------------------------------------
// Field validator
// ---------------------------------------------------------------------------

/// Accumulates field errors while converting raw strings to typed values.
///
/// Every method returns a usable placeholder when the field is rejected, so
/// a form can build its whole record and let [`FieldValidator::finish`]
/// decide whether to hand it back.
#[derive(Debug, Default)]
pub struct FieldValidator {
    errors: FieldErrors,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-blank text of at most `max` characters. Stored as submitted.
    pub fn required_text(&mut self, field: &'static str, raw: &str, max: usize) -> String {
        if raw.trim().is_empty() {
            self.errors.push(field, MSG_REQUIRED);
            return String::new();
        }
        self.check_length(field, raw, max);
        raw.to_string()
    }

    /// Optional text of at most `max` characters; blank becomes `None`.
    pub fn optional_text(
        &mut self,
        field: &'static str,
        raw: &str,
        max: usize,
    ) -> Option<String> {
        if raw.trim().is_empty() {
            return None;
        }
        self.check_length(field, raw, max);
        Some(raw.to_string())
    }

    /// Unbounded free text (text areas); blank becomes `None`.
    pub fn long_text(&mut self, raw: &str) -> Option<String> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(raw.to_string())
        }
    }

    /// Optional `YYYY-MM-DD` date.
    pub fn optional_date(&mut self, field: &'static str, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.errors.push(field, MSG_INVALID_DATE);
                None
            }
        }
    }

    /// Optional non-negative decimal, rounded to two fractional digits.
    pub fn optional_amount(&mut self, field: &'static str, raw: &str) -> Option<Decimal> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match Decimal::from_str(raw) {
            Ok(value) if value.is_sign_negative() && !value.is_zero() => {
                self.errors.push(field, MSG_NEGATIVE);
                None
            }
            Ok(value) => Some(value.round_dp(2)),
            Err(_) => {
                self.errors.push(field, MSG_INVALID_DECIMAL);
                None
            }
        }
    }

    /// Optional non-negative integer.
    pub fn optional_count(&mut self, field: &'static str, raw: &str) -> Option<i32> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<i32>() {
            Ok(value) if value < 0 => {
                self.errors.push(field, MSG_NEGATIVE);
                None
            }
            Ok(value) => Some(value),
            Err(_) => {
                self.errors.push(field, MSG_INVALID_INTEGER);
                None
            }
        }
    }

    /// Optional enumerated value; blank becomes `None`, anything else must
    /// be in `choices`.
    pub fn optional_choice(
        &mut self,
        field: &'static str,
        raw: &str,
        choices: &[Choice],
    ) -> Option<String> {
        if raw.is_empty() {
            return None;
        }
        if is_valid_choice(choices, raw) {
            Some(raw.to_string())
        } else {
            self.errors.push(field, MSG_INVALID_CHOICE);
            None
        }
    }

    /// Enumerated value that falls back to `default` when blank.
    pub fn choice_or_default(
        &mut self,
        field: &'static str,
        raw: &str,
        choices: &[Choice],
        default: &'static str,
    ) -> String {
        if raw.is_empty() {
            return default.to_string();
        }
        if !is_valid_choice(choices, raw) {
            self.errors.push(field, MSG_INVALID_CHOICE);
            return default.to_string();
        }
        raw.to_string()
    }

    /// Enumerated value that must be present.
    pub fn required_choice(
        &mut self,
        field: &'static str,
        raw: &str,
        choices: &[Choice],
    ) -> String {
        if raw.is_empty() {
            self.errors.push(field, MSG_REQUIRED);
            return String::new();
        }
        if !is_valid_choice(choices, raw) {
            self.errors.push(field, MSG_INVALID_CHOICE);
            return String::new();
        }
        raw.to_string()
    }

    /// Foreign-key select: must parse as an id present in `choices`.
    ///
    /// `0` is the placeholder option and counts as missing.
    pub fn required_id(&mut self, field: &'static str, raw: &str, choices: &[IdChoice]) -> DbId {
        let raw = raw.trim();
        let id = match raw.parse::<DbId>() {
            Ok(0) => None,
            Ok(id) => Some(id),
            Err(_) if raw.is_empty() => None,
            Err(_) => {
                self.errors.push(field, MSG_INVALID_CHOICE);
                return 0;
            }
        };
        match id {
            None => {
                self.errors.push(field, MSG_REQUIRED);
                0
            }
            Some(id) if choices.iter().any(|(choice_id, _)| *choice_id == id) => id,
            Some(_) => {
                self.errors.push(field, MSG_INVALID_CHOICE);
                0
            }
        }
    }

    /// Optional web address: normalized, then checked for shape and length.
    pub fn optional_url(&mut self, field: &'static str, raw: &str, max: usize) -> Option<String> {
        let url = normalize_url(Some(raw))?;
        if !is_well_formed(&url) {
            self.errors.push(field, MSG_INVALID_URL);
            return None;
        }
        self.check_length(field, &url, max);
        Some(url)
    }

    /// HTML checkbox: any submitted value means checked.
    pub fn checkbox(&mut self, raw: &Option<String>) -> bool {
        raw.is_some()
    }

    /// Hand back `record` if no field was rejected.
    pub fn finish<T>(self, record: T) -> Result<T, FieldErrors> {
        if self.errors.is_empty() {
            Ok(record)
        } else {
            Err(self.errors)
        }
    }

    fn check_length(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.errors.push(
                field,
                format!("Field cannot be longer than {max} characters."),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering helpers (typed value -> form text)
// ---------------------------------------------------------------------------

/// Render an optional value back into form text.
pub fn to_text<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Render a boolean back into a checkbox value.
pub fn to_checkbox(value: bool) -> Option<String> {
    value.then(|| "y".to_string())
}
