use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::views;

#[derive(Debug, ThisError)]
pub enum TodoError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Todo {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),
}

/// Rejected user input. Carries the name of the offending form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    #[error("`{0}` is required")]
    EmptyField(&'static str),
}

impl TodoError {
    pub fn status(&self) -> StatusCode {
        match self {
            TodoError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::DatabaseError(_) | TodoError::TemplateError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match &self {
            TodoError::Validation(e) => e.to_string(),
            TodoError::NotFound(_) => self.to_string(),
            TodoError::DatabaseError(_) | TodoError::TemplateError(_) => {
                error!(error = %self, "request failed");
                "An internal server error occurred.".to_string()
            }
        };

        match views::render_error(status, &message) {
            Ok(page) => (status, Html(page)).into_response(),
            Err(e) => {
                error!(error = %e, "failed to render error page");
                (status, message).into_response()
            }
        }
    }
}
