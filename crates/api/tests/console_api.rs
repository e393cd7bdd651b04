//! Integration tests for the query console and CSV export.

mod common;

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use common::{body_text, count_rows, get, insert_artist, location, post_form};
use sqlx::PgPool;

async fn seed(pool: &PgPool) {
    for name in ["Claude Monet", "Frida Kahlo", "Hokusai"] {
        insert_artist(pool, name).await;
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn console_form_has_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/sql-playground").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Run Query"));
    assert!(html.contains("Collections"));
    assert!(!html.contains("Generated SQL"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn console_table_picker_lists_every_table(pool: PgPool) {
    let app = common::build_test_app(pool);
    let html = body_text(get(app, "/sql-playground").await).await;

    assert!(html.contains(r#"<option value="artists" selected>Artists</option>"#));
    assert!(html.contains(r#"<option value="artworks">Artworks</option>"#));
    assert!(html.contains(r#"<option value="museums">Museums</option>"#));
    assert!(html.contains(r#"<option value="collections">Collections</option>"#));
    assert!(!html.contains(">Table</option>"));
    assert!(html.contains(r#"name="limit" value="50" step="1" min="1" max="1000""#));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn console_runs_statement_and_shows_rows(pool: PgPool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_form(
        app,
        "/sql-playground",
        "table=artists&columns=name&where_clause=&order_by=name+DESC&limit=2",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("SELECT name FROM artists ORDER BY name DESC LIMIT 2"));
    assert!(html.contains("Query returned 2 results"));
    assert!(html.contains("Hokusai"));
    assert!(html.contains("Frida Kahlo"));
    assert!(!html.contains("Claude Monet"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn console_shows_nulls(pool: PgPool) {
    insert_artist(&pool, "Anonymous").await;
    let app = common::build_test_app(pool);

    let response = post_form(
        app,
        "/sql-playground",
        "table=artists&columns=name%2C+nationality&limit=5",
    )
    .await;

    let html = body_text(response).await;
    assert!(html.contains("<span class=\"null\">NULL</span>"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn console_rejects_unlisted_table_before_running(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(app, "/sql-playground", "table=users&columns=*&limit=5").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Not a valid choice."));
    assert!(!html.contains("Generated SQL"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn console_rejects_limit_out_of_range(pool: PgPool) {
    let app = common::build_test_app(pool);

    for limit in ["0", "1001", "ten"] {
        let body = format!("table=artists&columns=*&limit={limit}");
        let html = body_text(post_form(app.clone(), "/sql-playground", &body).await).await;
        assert!(!html.contains("Generated SQL"), "limit {limit} was accepted");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn console_reports_store_errors(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(
        app,
        "/sql-playground",
        "table=artists&columns=no_such_column&limit=5",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("SQL Error:"));
    assert!(html.contains("does not exist"));
    assert!(html.contains("Generated SQL"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn console_cannot_write(pool: PgPool) {
    seed(&pool).await;
    let app = common::build_test_app(pool.clone());

    let response = post_form(
        app,
        "/sql-playground",
        "table=artists&columns=*&where_clause=TRUE%3B+DELETE+FROM+artists&limit=5",
    )
    .await;

    assert!(body_text(response).await.contains("SQL Error:"));
    assert_eq!(count_rows(&pool, "artists").await, 3);
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn export_downloads_header_plus_rows(pool: PgPool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/export/artists").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/csv"));
    let disposition = response.headers()[CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.contains("artists_export.csv"));

    let csv = body_text(response).await;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("id,name,birth_date"));
    assert!(lines[1].contains("Claude Monet"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn export_of_empty_table_redirects_to_list(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/export/museums").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/museums");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn export_of_unlisted_table_redirects_home(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/export/pg_user").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}
