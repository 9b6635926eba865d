//! Mock factorizer for testing.
//!
//! Returns a canned response and records every call, so tests can assert
//! that rejected matrices never reach the service.
//!
//! # Example
//!
//! ```ignore
//! use qr_stats::adapters::factorization::MockFactorizer;
//!
//! let factorizer = MockFactorizer::returning(
//!     vec![vec![1.0, 0.0], vec![0.0, 1.0]],
//!     vec![vec![2.0, 1.0], vec![0.0, 3.0]],
//! );
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::matrix::Matrix;
use crate::ports::{Factorization, FactorizationError, Factorizer};

/// Mock factorizer with a fixed response.
#[derive(Debug)]
pub struct MockFactorizer {
    response: Result<Factorization, FactorizationError>,
    calls: AtomicUsize,
    last_matrix: RwLock<Option<Matrix>>,
    last_token: RwLock<Option<String>>,
}

impl MockFactorizer {
    /// Creates a factorizer that always returns the given factors.
    pub fn returning(q: Vec<Vec<f64>>, r: Vec<Vec<f64>>) -> Self {
        Self::with_response(Ok(Factorization { q, r }))
    }

    /// Creates a factorizer that always fails with the given error.
    pub fn failing(error: FactorizationError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: Result<Factorization, FactorizationError>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_matrix: RwLock::new(None),
            last_token: RwLock::new(None),
        }
    }

    /// Number of times `factorize` was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The matrix passed to the most recent call.
    pub fn last_matrix(&self) -> Option<Matrix> {
        self.last_matrix.read().unwrap().clone()
    }

    /// The access token passed to the most recent call.
    pub fn last_token(&self) -> Option<String> {
        self.last_token.read().unwrap().clone()
    }
}

#[async_trait]
impl Factorizer for MockFactorizer {
    async fn factorize(
        &self,
        matrix: &Matrix,
        access_token: Option<&str>,
    ) -> Result<Factorization, FactorizationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_matrix.write().unwrap() = Some(matrix.clone());
        *self.last_token.write().unwrap() = access_token.map(str::to_string);
        self.response.clone()
    }
}
