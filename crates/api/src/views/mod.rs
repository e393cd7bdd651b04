//! Server-rendered HTML pages.
//!
//! Templates are Handlebars sources compiled into the binary and registered
//! once at startup. Every page is rendered through [`render`], which wraps
//! the page body in the shared layout with navigation and flash messages.

pub mod options;
pub mod pagination;

use axum::response::{Html, IntoResponse, Response};
use handlebars::{Handlebars, TemplateError};
use museum_core::error::CoreError;
use museum_core::forms::FieldErrors;
use museum_core::table::ResultSet;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::AppResult;
use crate::flash::{self, Flashes};
use crate::state::AppState;

/// Template name and source, in registration order. Partials are plain
/// templates referenced with `{{> name}}`.
const TEMPLATES: &[(&str, &str)] = &[
    ("layout", include_str!("../../templates/layout.hbs")),
    ("text_field", include_str!("../../templates/partials/text_field.hbs")),
    ("textarea_field", include_str!("../../templates/partials/textarea_field.hbs")),
    ("select_field", include_str!("../../templates/partials/select_field.hbs")),
    ("checkbox_field", include_str!("../../templates/partials/checkbox_field.hbs")),
    ("pager", include_str!("../../templates/partials/pager.hbs")),
    ("index", include_str!("../../templates/index.hbs")),
    ("artists", include_str!("../../templates/artists.hbs")),
    ("artist_form", include_str!("../../templates/artist_form.hbs")),
    ("artworks", include_str!("../../templates/artworks.hbs")),
    ("artwork_form", include_str!("../../templates/artwork_form.hbs")),
    ("museums", include_str!("../../templates/museums.hbs")),
    ("museum_form", include_str!("../../templates/museum_form.hbs")),
    ("collections", include_str!("../../templates/collections.hbs")),
    ("collection_form", include_str!("../../templates/collection_form.hbs")),
    ("sql_playground", include_str!("../../templates/sql_playground.hbs")),
];

/// Navigation entries: `(href, label, section)`.
const NAV: &[(&str, &str, Section)] = &[
    ("/", "Dashboard", Section::Dashboard),
    ("/artists", "Artists", Section::Artists),
    ("/artworks", "Artworks", Section::Artworks),
    ("/museums", "Museums", Section::Museums),
    ("/collections", "Collections", Section::Collections),
    ("/sql-playground", "SQL Playground", Section::Playground),
];

/// Top-level section a page belongs to, for highlighting the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Artists,
    Artworks,
    Museums,
    Collections,
    Playground,
}

/// Compile every page template.
pub fn templates() -> Result<Handlebars<'static>, TemplateError> {
    let mut registry = Handlebars::new();
    for (name, source) in TEMPLATES {
        registry.register_template_string(name, *source)?;
    }
    Ok(registry)
}

/// A page ready to render: template name, heading and template data.
pub struct Page {
    pub template: &'static str,
    pub title: String,
    pub section: Section,
    /// Template data; must serialize to a JSON object.
    pub body: Value,
}

impl Page {
    pub fn new(template: &'static str, title: impl Into<String>, section: Section) -> Self {
        Self {
            template,
            title: title.into(),
            section,
            body: Value::Object(Map::new()),
        }
    }

    /// Attach template data.
    pub fn with(mut self, body: Value) -> Self {
        self.body = body;
        self
    }
}

#[derive(Serialize)]
struct NavLink {
    href: &'static str,
    label: &'static str,
    active: bool,
}

/// Render `page` inside the layout with the pending flash messages.
///
/// Clears the flash cookie when one was consumed by this request.
pub fn render(state: &AppState, flashes: &Flashes, page: Page) -> AppResult<Response> {
    let mut context = match page.body {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let nav: Vec<NavLink> = NAV
        .iter()
        .map(|&(href, label, section)| NavLink {
            href,
            label,
            active: section == page.section,
        })
        .collect();

    context.insert("title".into(), Value::String(page.title));
    context.insert("nav".into(), to_json(&nav)?);
    context.insert("flashes".into(), to_json(flashes.messages())?);

    let html = state
        .templates
        .render(page.template, &Value::Object(context))
        .map_err(|e| CoreError::Internal(format!("Failed to render {}: {e}", page.template)))?;

    let response = Html(html).into_response();
    if flashes.consumed_cookie() {
        Ok(flash::clear_cookie(&state.config, response))
    } else {
        Ok(response)
    }
}

/// Serialize template data, reporting failure as an internal error.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| CoreError::Internal(format!("Failed to serialize page data: {e}")).into())
}

/// Field errors as a `field -> message` object, first message per field.
pub fn field_errors(errors: &FieldErrors) -> Value {
    let mut map = Map::new();
    for error in errors.iter() {
        map.entry(error.field.to_string())
            .or_insert_with(|| Value::String(error.message.clone()));
    }
    Value::Object(map)
}

/// A result set shaped for the results table: NULLs flagged per cell.
pub fn result_table(rows: &ResultSet) -> Value {
    let body: Vec<Value> = rows
        .rows
        .iter()
        .map(|row| {
            Value::Array(
                row.iter()
                    .map(|cell| match cell {
                        Some(text) => json!({ "text": text, "is_null": false }),
                        None => json!({ "text": "", "is_null": true }),
                    })
                    .collect(),
            )
        })
        .collect();

    json!({
        "columns": rows.columns,
        "rows": body,
        "count": rows.len(),
    })
}
