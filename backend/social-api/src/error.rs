/// Error types for the social API.
///
/// Engines return one error kind per failure; the HTTP boundary maps the
/// kind to a status code verbatim. Responses carry a stable machine-readable
/// kind next to the human-readable message and never expose store internals.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::store::StoreError;

/// Result type for social-api operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input (empty/oversized fields, self-referencing action)
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid credential
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not allowed
    #[error("{0}")]
    Forbidden(String),

    /// Target entity absent
    #[error("{0}")]
    NotFound(String),

    /// Duplicate follow/like, already-exists state
    #[error("{0}")]
    Conflict(String),

    /// Store operation failed
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Stable machine-readable kind, part of the API contract.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Unauthorized(_) => "authentication_error",
            ApiError::Forbidden(_) => "authorization_error",
            ApiError::NotFound(_) => "not_found",
            ApiError::Conflict(_) => "conflict",
            ApiError::Database(_) => "database_error",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            // Duplicate-state conflicts answer 400, matching the original API
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            // Never leak store or internal detail to clients
            ApiError::Database(_) | ApiError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.kind(),
            "message": message,
            "status": status.as_u16(),
        }))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => {
                ApiError::Conflict("Email already registered".to_string())
            }
            StoreError::Unavailable(msg) => ApiError::Database(msg),
        }
    }
}

impl From<auth_tokens::TokenError> for ApiError {
    fn from(err: auth_tokens::TokenError) -> Self {
        match err {
            auth_tokens::TokenError::Expired => {
                ApiError::Unauthorized("Token expired".to_string())
            }
            auth_tokens::TokenError::Invalid => {
                ApiError::Unauthorized("Invalid token".to_string())
            }
            auth_tokens::TokenError::Creation => {
                ApiError::Internal("Failed to generate token".to_string())
            }
        }
    }
}
