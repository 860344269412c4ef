//! API error types with IntoResponse
//!
//! Every error becomes the failure envelope
//! `{"success": false, "error": <status>, "message": <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body (402) or malformed query (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Route exists, method does not (405)
    MethodNotAllowed,

    /// Store failure (422, logged with its cause)
    Store(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            // POST bodies that fail to parse answer 402; clients of this API
            // already key on that code.
            Self::Validation(ValidationError::MalformedBody { .. }) => StatusCode::PAYMENT_REQUIRED,
            Self::Validation(ValidationError::InvalidQuery { .. }) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::MalformedBody { .. }) => "malformed request body",
            Self::Validation(ValidationError::InvalidQuery { .. }) => "bad request",
            Self::NotFound { .. } => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Store(_) => "unprocessable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(e) => tracing::debug!("Rejected request: {}", e),
            Self::NotFound { resource, id } => tracing::debug!("{} '{}' not found", resource, id),
            // Log the actual error, return generic message
            Self::Store(e) => tracing::error!("Store error: {}", e),
            Self::MethodNotAllowed => {}
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Store(e),
        }
    }
}
