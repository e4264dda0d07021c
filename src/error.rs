//! API error type
//!
//! Every failure a handler can produce maps to one variant here; the
//! response body is always `{"message": ...}` and diagnostic detail is
//! only logged, never returned to the caller.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Lookup by identifier or email matched nothing
    #[error("{0} not found.")]
    NotFound(&'static str),
    /// Password hash mismatch on login
    #[error("Invalid credentials.")]
    InvalidCredentials,
    /// Duplicate barber name, service title, or booked slot
    #[error("{0}")]
    Conflict(String),
    /// Malformed or incomplete request
    #[error("{0}")]
    InvalidRequest(String),
    /// Missing or unverifiable access token
    #[error("Missing or invalid access token.")]
    Unauthorized,
    /// Store or object-storage failure; message is the caller-facing
    /// generic one, the cause was already logged
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Log the underlying cause and return a generic internal error
    pub fn internal(message: impl Into<String>, err: impl std::fmt::Display) -> Self {
        let message = message.into();
        tracing::error!(error = %err, "{message}");
        ApiError::Internal(message)
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidCredentials => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Malformed bodies and query strings keep the `{"message"}` contract
// instead of axum's plain-text rejections.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let body = json!({ "message": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Convenience alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;
