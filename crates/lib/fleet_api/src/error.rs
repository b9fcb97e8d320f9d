//! Application error types.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fleet_core::auth::AuthError;
use fleet_core::services::ServiceError;
use fleet_core::store::StoreError;
use thiserror::Error;
use tracing::error;

use crate::models::{ErrorResponse, ValidationErrors};

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {}", .0.messages.join(", "))]
    Validation(ValidationErrors),

    /// Always rendered as a bare 401 so callers learn nothing about why.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(&'static str),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            AppError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, Json(message)).into_response(),
            AppError::Conflict(message) => error_body(StatusCode::CONFLICT, "conflict", message),
            AppError::MalformedInput(message) => {
                error_body(StatusCode::BAD_REQUEST, "malformed_input", message)
            }
            AppError::Internal(detail) => {
                error!(%detail, "request failed");
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error".into(),
                )
            }
        }
    }
}

fn error_body(status: StatusCode, error: &str, message: String) -> Response {
    let body = Json(ErrorResponse {
        error: error.to_string(),
        message,
    });
    (status, body).into_response()
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::MalformedInput(e.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(e: PathRejection) -> Self {
        AppError::MalformedInput(e.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::MalformedInput(e.body_text())
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateKey(key) => {
                AppError::Conflict(format!("Email already registered: {key}"))
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::CredentialError => AppError::Unauthorized,
            AuthError::TokenError(msg) => AppError::Internal(msg),
            AuthError::StoreError(e) => AppError::from(e),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::DuplicateKey(email) => {
                AppError::Conflict(format!("Email already registered: {email}"))
            }
            ServiceError::InvalidArgument(what) => AppError::Validation(ValidationErrors {
                messages: vec![format!("Invalid {what}")],
            }),
            ServiceError::StoreError(e) => AppError::from(e),
        }
    }
}
