//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `QR_STATS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use qr_stats::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod auth;
mod error;
mod factorization;
mod server;
mod statistics;

pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use factorization::FactorizationConfig;
pub use server::{Environment, ServerConfig};
pub use statistics::StatisticsConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Authentication configuration (shared JWT secret)
    pub auth: AuthConfig,

    /// External factorization service
    #[serde(default)]
    pub factorization: FactorizationConfig,

    /// Statistics engine settings
    #[serde(default)]
    pub statistics: StatisticsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `QR_STATS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `QR_STATS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `QR_STATS__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("QR_STATS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Port and timeout ranges
    /// - Secret presence (and strength in production)
    /// - Factorization URL format (HTTPS in production)
    /// - Tolerance is finite and positive
    /// - Factorization retries finish before the request timeout
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.factorization.validate(&self.server.environment)?;
        self.server
            .ensure_fits_request_timeout(self.factorization.worst_case_duration())?;
        self.statistics.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to set environment variables for testing
    /// Uses double underscores to separate nested config values
    fn set_minimal_env() {
        env::set_var("QR_STATS__AUTH__JWT_SECRET", "test-secret");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("QR_STATS__AUTH__JWT_SECRET");
        env::remove_var("QR_STATS__SERVER__PORT");
        env::remove_var("QR_STATS__SERVER__ENVIRONMENT");
        env::remove_var("QR_STATS__SERVER__REQUEST_TIMEOUT_SECS");
        env::remove_var("QR_STATS__FACTORIZATION__TIMEOUT_SECS");
        env::remove_var("QR_STATS__FACTORIZATION__BASE_URL");
        env::remove_var("QR_STATS__FACTORIZATION__MAX_RETRIES");
        env::remove_var("QR_STATS__STATISTICS__DIAGONAL_TOLERANCE");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.auth.jwt_secret.expose_secret(), "test-secret");
    }

    #[test]
    fn test_load_fails_without_secret() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.factorization.base_url, "http://localhost:8081");
        assert!(config.factorization.worst_case_duration() < config.server.request_timeout());
        assert_eq!(config.statistics.diagonal_tolerance, 1e-10);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("QR_STATS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        // Short secret and plain-HTTP service are rejected in production
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("QR_STATS__SERVER__PORT", "3000");
        env::set_var("QR_STATS__FACTORIZATION__BASE_URL", "http://qr-service:9000");
        env::set_var("QR_STATS__FACTORIZATION__MAX_RETRIES", "5");
        env::set_var("QR_STATS__STATISTICS__DIAGONAL_TOLERANCE", "0.000001");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.factorization.base_url, "http://qr-service:9000");
        assert_eq!(config.factorization.max_retries, 5);
        assert_eq!(config.statistics.diagonal_tolerance, 1e-6);
    }

    #[test]
    fn test_factorization_budget_must_fit_request_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("QR_STATS__SERVER__REQUEST_TIMEOUT_SECS", "2");
        env::set_var("QR_STATS__FACTORIZATION__TIMEOUT_SECS", "1");
        env::set_var("QR_STATS__FACTORIZATION__MAX_RETRIES", "2");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::FactorizationBudgetExceedsRequestTimeout {
                request_timeout_secs: 2,
                ..
            })
        ));
    }
}
