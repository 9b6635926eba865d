//! Factorizer port - QR decomposition performed by an external service.
//!
//! The decomposition itself never happens in this crate. Adapters send a
//! validated, submittable matrix to the service and hand back whatever Q and
//! R it returned. Those factors are untrusted until they pass the
//! `ValidationGate`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::matrix::Matrix;

/// Raw factors returned by the service, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Factorization {
    pub q: Vec<Vec<f64>>,
    pub r: Vec<Vec<f64>>,
}

/// Errors from the factorization service call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FactorizationError {
    /// The service rejected the matrix.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The service rejected the forwarded credentials.
    #[error("factorization service rejected credentials")]
    Unauthorized,

    /// The service answered with a server error.
    #[error("factorization service unavailable: {message}")]
    Unavailable { message: String },

    /// The service could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete in time.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The response could not be understood.
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl FactorizationError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    /// Returns true if repeating the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FactorizationError::Unavailable { .. }
                | FactorizationError::Network(_)
                | FactorizationError::Timeout { .. }
        )
    }
}

/// Computes a QR decomposition somewhere else.
///
/// # Contract
///
/// Implementations must:
/// - Only be called with matrices that passed `ensure_submittable`
/// - Forward `access_token` as a Bearer credential when present
/// - Return `FactorizationError::InvalidInput` when the service rejects the matrix
/// - Return a retryable error only for transient failures
#[async_trait]
pub trait Factorizer: Send + Sync {
    async fn factorize(
        &self,
        matrix: &Matrix,
        access_token: Option<&str>,
    ) -> Result<Factorization, FactorizationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors_are_retryable() {
        assert!(FactorizationError::unavailable("502").is_retryable());
        assert!(FactorizationError::network("refused").is_retryable());
        assert!(FactorizationError::Timeout { timeout_secs: 30 }.is_retryable());
    }

    #[test]
    fn permanent_errors_are_not_retryable() {
        assert!(!FactorizationError::InvalidInput("bad".to_string()).is_retryable());
        assert!(!FactorizationError::Unauthorized.is_retryable());
        assert!(!FactorizationError::protocol("garbage").is_retryable());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            FactorizationError::Timeout { timeout_secs: 5 }.to_string(),
            "request timed out after 5s"
        );
        assert_eq!(
            FactorizationError::unavailable("status 503").to_string(),
            "factorization service unavailable: status 503"
        );
    }

    #[test]
    fn factorizer_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Factorizer>();
    }
}
