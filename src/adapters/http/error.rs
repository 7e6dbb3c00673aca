//! Error responses and the domain error → HTTP status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::str::FromStr;

use crate::domain::foundation::DomainError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    /// Caller input was rejected by validation.
    BadRequest(DomainError),
    /// The addressed record does not exist.
    NotFound { resource: &'static str, id: String },
    /// Anything else. `verbose` exposes the message to the caller.
    Internal { error: DomainError, verbose: bool },
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Maps a domain error: validation codes become 400, the rest 500.
    pub fn from_domain(error: DomainError, verbose: bool) -> Self {
        if error.is_validation() {
            ApiError::BadRequest(error)
        } else {
            ApiError::Internal { error, verbose }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(error) => {
                let details = (!error.details.is_empty())
                    .then(|| serde_json::to_value(&error.details).ok())
                    .flatten();
                ErrorResponse {
                    code: error.code.to_string(),
                    message: error.message,
                    details,
                }
            }
            ApiError::NotFound { resource, id } => ErrorResponse::not_found(resource, &id),
            ApiError::Internal { error, verbose } => {
                tracing::error!(code = %error.code, error = %error.message, "Request failed");
                let message = if verbose {
                    error.message
                } else {
                    "Internal server error".to_string()
                };
                ErrorResponse {
                    code: error.code.to_string(),
                    message,
                    details: None,
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Body returned by successful deletes.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Parses an identifier path segment. Anything that is not a positive
/// integer addresses nothing, so it reads as 404.
pub fn path_id<I: FromStr>(resource: &'static str, raw: &str) -> Result<I, ApiError> {
    raw.parse().map_err(|_| ApiError::not_found(resource, raw))
}
