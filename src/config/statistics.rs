//! Statistics engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::matrix::{StatisticsAggregator, DEFAULT_TOLERANCE};

/// Statistics engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsConfig {
    /// Magnitude at or below which an off-diagonal cell counts as zero
    #[serde(default = "default_tolerance")]
    pub diagonal_tolerance: f64,
}

impl StatisticsConfig {
    /// Build the aggregator this configuration describes
    pub fn aggregator(&self) -> StatisticsAggregator {
        StatisticsAggregator::new(self.diagonal_tolerance)
    }

    /// Validate statistics configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.diagonal_tolerance.is_finite() || self.diagonal_tolerance <= 0.0 {
            return Err(ValidationError::InvalidTolerance);
        }
        Ok(())
    }
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            diagonal_tolerance: default_tolerance(),
        }
    }
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_config_defaults() {
        let config = StatisticsConfig::default();
        assert_eq!(config.diagonal_tolerance, 1e-10);
        assert_eq!(config.aggregator(), StatisticsAggregator::default());
    }

    #[test]
    fn test_validation_rejects_non_positive() {
        for tolerance in [0.0, -1e-10, f64::NAN, f64::INFINITY] {
            let config = StatisticsConfig {
                diagonal_tolerance: tolerance,
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidTolerance));
        }
    }

    #[test]
    fn test_aggregator_uses_configured_tolerance() {
        let config = StatisticsConfig {
            diagonal_tolerance: 1e-6,
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.aggregator(), StatisticsAggregator::new(1e-6));
    }
}
