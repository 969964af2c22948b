use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid form input: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Page shown for any failed request
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}

// Convert AppError to an HTML error page
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, errors.to_string()),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error".into()),
            AppError::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Template error".into()),
        };

        tracing::error!(?self);

        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        let body = page.render().unwrap_or_else(|e| {
            tracing::error!("Error page render failed: {}", e);
            page.message.clone()
        });

        (status, Html(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
