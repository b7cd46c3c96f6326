//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::ValidationError;
use crate::presenter::{self, Presentation};
use crate::store::StoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body is not valid JSON or does not have the form's shape
    #[error("Malformed request body")]
    MalformedRequest(#[from] JsonRejection),

    // Account store errors (4xx / 5xx)
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// HTTP status and machine-readable code
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.code()),
            AppError::MalformedRequest(_) => (StatusCode::BAD_REQUEST, "malformed_request"),
            AppError::Store(StoreError::NoAccountCreated) => {
                (StatusCode::BAD_GATEWAY, "no_account_created")
            }
            AppError::Store(StoreError::Rejected(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "store_rejected")
            }
            AppError::Store(StoreError::Unavailable(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable")
            }
            AppError::Store(StoreError::Unexpected(_)) => {
                (StatusCode::BAD_GATEWAY, "store_unexpected_response")
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub presentation: Presentation,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        match &self {
            AppError::Validation(e) => {
                tracing::debug!(error_code, "Validation failed: {}", e);
            }
            AppError::MalformedRequest(rejection) => {
                // Rejection text can quote field values, PINs included
                tracing::debug!(error_code, status = %rejection.status(), "Malformed request body");
            }
            AppError::Store(e) if e.is_rejection() => {
                tracing::warn!(error_code, error = ?e, "Account store rejected request");
            }
            _ => {
                tracing::error!(error_code, error = ?self, "Request failed");
            }
        }

        let body = ErrorResponse {
            error_code: error_code.to_string(),
            presentation: presenter::failed(&self),
        };

        (status, Json(body)).into_response()
    }
}
