//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. Every error body uses the
//! field-keyed map shape, so clients only ever parse one format.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::config::MSG_INTERNAL;
use crate::domain::ValidationErrors;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Input failed one or more rules, or the email is already taken
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// Request body could not be decoded
    #[error("Invalid input: {0}")]
    BadRequest(String),

    /// Persisting failed for a reason the client cannot fix
    #[error("storage unavailable: {0}")]
    Unavailable(ValidationErrors),

    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unavailable(_)
            | AppError::Database(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error map (hides internal details)
    fn into_body(self) -> ValidationErrors {
        match self {
            AppError::Validation(errors) | AppError::Unavailable(errors) => errors,
            AppError::BadRequest(msg) => ValidationErrors::non_field(msg),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                ValidationErrors::non_field(MSG_INTERNAL)
            }
            AppError::Config(msg) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ValidationErrors::non_field(MSG_INTERNAL)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.into_body())).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
