//! Shared HTTP error type.
//!
//! Every handler returns `ApiError` on failure; the status and the
//! `{ "error": ..., "details"?: ... }` body are decided here in one place.

use axum::{
    extract::rejection::JsonRejection,
    BoxError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::application::SubmitMatrixError;
use crate::domain::matrix::MatrixError;
use crate::ports::FactorizationError;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            error: error.into(),
            details: Some(details),
        }
    }
}

/// API error that implements IntoResponse.
#[derive(Debug, Clone)]
pub enum ApiError {
    BadRequest(ErrorResponse),
    Unauthorized(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(body) => body,
            ApiError::Unauthorized(msg)
            | ApiError::ServiceUnavailable(msg)
            | ApiError::Internal(msg) => ErrorResponse::new(msg),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(ErrorResponse::with_details(
            "Invalid request body",
            json!([rejection.body_text()]),
        ))
    }
}

impl From<MatrixError> for ApiError {
    fn from(error: MatrixError) -> Self {
        let details = json!({
            "kind": error.kind().to_string(),
            "code": error.code(),
            "field": error.field(),
        });
        ApiError::BadRequest(ErrorResponse::with_details(error.to_string(), details))
    }
}

impl From<FactorizationError> for ApiError {
    fn from(error: FactorizationError) -> Self {
        match error {
            FactorizationError::InvalidInput(msg) => ApiError::BadRequest(ErrorResponse::new(msg)),
            FactorizationError::Unauthorized => {
                ApiError::Unauthorized("Factorization service rejected credentials".to_string())
            }
            FactorizationError::Unavailable { .. }
            | FactorizationError::Network(_)
            | FactorizationError::Timeout { .. } => {
                ApiError::ServiceUnavailable("Factorization service unavailable".to_string())
            }
            FactorizationError::Protocol(_) => {
                ApiError::Internal("Failed to factorize matrix".to_string())
            }
        }
    }
}

impl From<SubmitMatrixError> for ApiError {
    fn from(error: SubmitMatrixError) -> Self {
        match error {
            SubmitMatrixError::InvalidMatrix(e) => e.into(),
            SubmitMatrixError::Factorization(e) => e.into(),
            SubmitMatrixError::InvalidFactors(_) => {
                ApiError::Internal("Factorization service returned invalid factors".to_string())
            }
        }
    }
}

/// Turns errors raised by the tower stack into `ApiError`s.
///
/// A request that outlives the server-wide deadline becomes a 503 with the
/// usual JSON body.
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("Request exceeded the server timeout");
        ApiError::ServiceUnavailable("Request timed out".to_string())
    } else {
        tracing::error!("Unhandled middleware error: {}", err);
        ApiError::Internal("Internal server error".to_string())
    }
}
