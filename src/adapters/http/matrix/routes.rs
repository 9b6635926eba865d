//! Axum router configuration for matrix endpoints.

use axum::{routing::post, Router};

use super::handlers::{submit_matrix, MatrixAppState};

/// Create the matrix router.
///
/// # Routes
///
/// - `POST /matrix/qr` - Normalize, factorize and aggregate a matrix
///
/// Suitable for nesting under `/api/v1`.
pub fn matrix_router() -> Router<MatrixAppState> {
    Router::new().route("/matrix/qr", post(submit_matrix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_defined() {
        let _router = matrix_router();
    }
}
