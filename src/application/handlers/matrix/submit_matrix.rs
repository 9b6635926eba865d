//! SubmitMatrixHandler - Factorizes a user matrix and aggregates the factors.
//!
//! Flow:
//! 1. Normalize the edited grid (zero-pad short rows)
//! 2. Enforce the submission precondition (non-empty, rows >= cols)
//! 3. Send the matrix to the `Factorizer`
//! 4. Run the returned Q/R through the `ValidationGate`
//! 5. Aggregate statistics over the validated factors
//!
//! Steps 1 and 2 reject bad input before any network call.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::matrix::{
    ensure_submittable, Matrix, MatrixError, StatisticsAggregator, StatisticsResult,
    ValidationGate,
};
use crate::ports::{FactorizationError, Factorizer};

/// Command to submit a user-edited matrix.
#[derive(Debug, Clone)]
pub struct SubmitMatrixCommand {
    /// Rows as entered, possibly ragged.
    pub rows: Vec<Vec<f64>>,
    /// Caller's token, forwarded to the factorization service.
    pub access_token: Option<String>,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitMatrixResult {
    /// The normalized matrix that was factorized.
    pub original: Matrix,
    pub q: Matrix,
    pub r: Matrix,
    pub statistics: StatisticsResult,
}

/// Errors that can occur while submitting a matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitMatrixError {
    /// The user's matrix failed normalization or the precondition.
    #[error(transparent)]
    InvalidMatrix(#[from] MatrixError),

    /// The factorization service call failed.
    #[error("factorization failed: {0}")]
    Factorization(#[from] FactorizationError),

    /// The service answered, but its factors did not pass validation.
    #[error("factorization service returned invalid factors: {0}")]
    InvalidFactors(MatrixError),
}

/// Handler for matrix submission.
pub struct SubmitMatrixHandler {
    factorizer: Arc<dyn Factorizer>,
    aggregator: StatisticsAggregator,
}

impl SubmitMatrixHandler {
    pub fn new(factorizer: Arc<dyn Factorizer>, aggregator: StatisticsAggregator) -> Self {
        Self {
            factorizer,
            aggregator,
        }
    }

    pub async fn handle(
        &self,
        command: SubmitMatrixCommand,
    ) -> Result<SubmitMatrixResult, SubmitMatrixError> {
        let original = Matrix::from_ragged("matrix", &command.rows)?;
        ensure_submittable("matrix", &original)?;

        let dims = original.dimensions();
        tracing::debug!(dims = %dims, "Submitting matrix for factorization");

        let factors = self
            .factorizer
            .factorize(&original, command.access_token.as_deref())
            .await
            .map_err(|e| {
                tracing::error!(dims = %dims, "Factorization failed: {}", e);
                e
            })?;

        let (q, r) = ValidationGate::validate(factors.q, factors.r).map_err(|e| {
            tracing::error!("Factorization service returned invalid factors: {}", e);
            SubmitMatrixError::InvalidFactors(e)
        })?;

        let statistics = self.aggregator.aggregate(&q, &r);

        Ok(SubmitMatrixResult {
            original,
            q,
            r,
            statistics,
        })
    }
}
