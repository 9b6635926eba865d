//! HTTP handlers for the statistics endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::{ComputeStatisticsCommand, ComputeStatisticsHandler};
use crate::domain::matrix::StatisticsResult;

use super::dto::StatisticsRequest;

/// Application state for statistics endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsAppState {
    pub handler: ComputeStatisticsHandler,
}

/// Compute statistics over a Q/R pair.
///
/// POST /api/v1/statistics
pub async fn compute_statistics(
    State(state): State<StatisticsAppState>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<StatisticsRequest>, JsonRejection>,
) -> Result<Json<StatisticsResult>, ApiError> {
    let Json(request) = payload?;

    let command = ComputeStatisticsCommand {
        q: request.q,
        r: request.r,
    };

    let result = state.handler.handle(command)?;

    tracing::debug!(user_id = %user.id, "Statistics computed");

    Ok(Json(result))
}
