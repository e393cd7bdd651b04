//! Dashboard: row counts, recent artworks and export links.

use axum::extract::State;
use axum::response::Response;
use museum_core::flash::Flash;
use museum_core::table::CatalogTable;
use museum_db::models::dashboard::DashboardStats;
use museum_db::repositories::DashboardRepo;
use serde::Serialize;
use serde_json::json;

use crate::error::AppResult;
use crate::flash::Flashes;
use crate::state::AppState;
use crate::views::{self, Page, Section};

/// Shown in place of a count whose query failed.
const UNAVAILABLE: &str = "N/A";

#[derive(Serialize)]
struct CountCard {
    label: &'static str,
    href: String,
    value: String,
}

#[derive(Serialize)]
struct ExportLink {
    table: &'static str,
    label: &'static str,
}

/// GET /
pub async fn index(State(state): State<AppState>, mut flashes: Flashes) -> AppResult<Response> {
    let stats = match state.connection().await {
        Ok(mut conn) => DashboardRepo::stats(&mut conn).await,
        Err(e) => {
            flashes.push(Flash::error(e.notice()));
            DashboardStats::default()
        }
    };

    let counts: Vec<CountCard> = CatalogTable::ALL
        .into_iter()
        .map(|table| {
            let count = match table {
                CatalogTable::Artists => stats.artists,
                CatalogTable::Artworks => stats.artworks,
                CatalogTable::Museums => stats.museums,
                CatalogTable::Collections => stats.collections,
            };
            CountCard {
                label: table.label(),
                href: format!("/{table}"),
                value: count.map_or_else(|| UNAVAILABLE.to_string(), |n| n.to_string()),
            }
        })
        .collect();

    let exports: Vec<ExportLink> = CatalogTable::ALL
        .into_iter()
        .map(|table| ExportLink {
            table: table.as_str(),
            label: table.label(),
        })
        .collect();

    let body = json!({
        "counts": counts,
        "recent_artworks": stats.recent_artworks,
        "exports": exports,
    });

    views::render(
        &state,
        &flashes,
        Page::new("index", "Dashboard", Section::Dashboard).with(body),
    )
}
