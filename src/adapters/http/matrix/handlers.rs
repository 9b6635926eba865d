//! HTTP handlers for matrix submission.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{bearer_token, BearerToken, RequireAuth};
use crate::application::{SubmitMatrixCommand, SubmitMatrixHandler};
use crate::domain::matrix::parse_grid;

use super::dto::{SubmitMatrixRequest, SubmitMatrixResponse};

/// Application state for matrix endpoints.
#[derive(Clone)]
pub struct MatrixAppState {
    pub handler: Arc<SubmitMatrixHandler>,
}

/// Factorize a matrix and aggregate its factors.
///
/// POST /api/v1/matrix/qr
///
/// The caller's bearer token is forwarded to the factorization service.
pub async fn submit_matrix(
    State(state): State<MatrixAppState>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    payload: Result<Json<SubmitMatrixRequest>, JsonRejection>,
) -> Result<Json<SubmitMatrixResponse>, ApiError> {
    let Json(request) = payload?;

    let access_token = match bearer_token(&headers) {
        BearerToken::Present(token) => Some(token.to_string()),
        BearerToken::Missing | BearerToken::Malformed => None,
    };

    let command = SubmitMatrixCommand {
        rows: parse_grid("matrix", &request.matrix)?,
        access_token,
    };

    let result = state.handler.handle(command).await?;

    tracing::debug!(
        user_id = %user.id,
        dims = %result.original.dimensions(),
        "Matrix factorized"
    );

    Ok(Json(result.into()))
}
