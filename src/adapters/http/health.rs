//! Health check endpoint.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Service name reported by the health check.
pub const SERVICE_NAME: &str = "qr-stats";

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Unauthenticated health router.
pub fn health_router() -> Router {
    Router::new().route("/health", get(health))
}
