//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Server host must be an IP address: {0}")]
    InvalidHost(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("JWT secret must be at least 32 bytes in production")]
    WeakJwtSecret,

    #[error("Invalid factorization service URL")]
    InvalidFactorizationUrl,

    #[error("Factorization service URL must use HTTPS in production")]
    FactorizationUrlMustBeHttps,

    #[error("Factorization retries exceed maximum allowed (10)")]
    TooManyRetries,

    #[error(
        "Factorization worst case ({budget_ms}ms) must be shorter than the request timeout ({request_timeout_secs}s)"
    )]
    FactorizationBudgetExceedsRequestTimeout {
        budget_ms: u64,
        request_timeout_secs: u64,
    },

    #[error("Diagonal tolerance must be finite and positive")]
    InvalidTolerance,
}
