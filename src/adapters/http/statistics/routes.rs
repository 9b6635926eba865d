//! Axum router configuration for the statistics endpoint.

use axum::{routing::post, Router};

use super::handlers::{compute_statistics, StatisticsAppState};

/// Create the statistics router.
///
/// # Routes
///
/// - `POST /statistics` - Validate Q and R and aggregate them
///
/// Suitable for nesting under `/api/v1`.
pub fn statistics_router() -> Router<StatisticsAppState> {
    Router::new().route("/statistics", post(compute_statistics))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_defined() {
        let _router = statistics_router();
    }
}
