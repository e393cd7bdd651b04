use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use museum_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and separates an unreachable store
/// from a statement the store rejected. Handlers normally turn these into a
/// flash notice; [`IntoResponse`] is the fallback that renders an error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `museum_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No connection could be obtained from the pool.
    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// The store rejected a statement.
    #[error("Database error: {0}")]
    Statement(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Short user-facing message suitable for a flash notice.
    pub fn notice(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound { entity, .. }) => format!("{entity} not found"),
            AppError::Core(CoreError::Validation(msg)) => msg.clone(),
            AppError::Core(CoreError::Internal(_)) => "An internal error occurred".to_string(),
            AppError::Connection(_) => "Database connection error".to_string(),
            AppError::Statement(err) => statement_message(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Core(CoreError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Statement(err) => classify_sqlx_error(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = format!(
            "<!doctype html>\n<html><head><title>{code}</title></head>\
             <body><h1>{code}</h1><p>{message}</p><p><a href=\"/\">Back to dashboard</a></p>\
             </body></html>",
            code = status,
            message = handlebars::html_escape(&self.notice()),
        );

        (status, Html(body)).into_response()
    }
}

/// The store's own message for a rejected statement, without the driver prefix.
pub fn statement_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}

/// Classify a sqlx error into an HTTP status.
///
/// - `RowNotFound` maps to 404.
/// - Unique (23505), foreign key (23503) and check (23514) violations map to 409.
/// - Everything else maps to 500.
fn classify_sqlx_error(err: &sqlx::Error) -> StatusCode {
    match err {
        sqlx::Error::RowNotFound => StatusCode::NOT_FOUND,
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505" | "23503" | "23514") => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        },
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
