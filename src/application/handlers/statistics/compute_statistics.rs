//! ComputeStatisticsHandler - Validates a Q/R pair and aggregates it.

use serde_json::Value;

use crate::domain::matrix::{MatrixError, StatisticsAggregator, StatisticsResult, ValidationGate};

/// Command carrying the raw JSON factors exactly as the caller sent them.
#[derive(Debug, Clone)]
pub struct ComputeStatisticsCommand {
    pub q: Value,
    pub r: Value,
}

/// Handler for the statistics computation.
///
/// Runs the `ValidationGate` first; on failure nothing is aggregated.
/// Synchronous because no port is involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeStatisticsHandler {
    aggregator: StatisticsAggregator,
}

impl ComputeStatisticsHandler {
    pub fn new(aggregator: StatisticsAggregator) -> Self {
        Self { aggregator }
    }

    pub fn handle(&self, command: ComputeStatisticsCommand) -> Result<StatisticsResult, MatrixError> {
        let (q, r) = ValidationGate::validate_json(&command.q, &command.r).map_err(|e| {
            tracing::warn!(field = e.field(), code = e.code(), "Rejected statistics input: {}", e);
            e
        })?;

        let result = self.aggregator.aggregate(&q, &r);

        tracing::debug!(
            q_dims = %q.dimensions(),
            r_dims = %r.dimensions(),
            q_diagonal = result.is_diagonal.q,
            r_diagonal = result.is_diagonal.r,
            "Computed statistics"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matrix::{DiagonalFlags, MatrixErrorKind};
    use serde_json::json;

    fn command(q: Value, r: Value) -> ComputeStatisticsCommand {
        ComputeStatisticsCommand { q, r }
    }

    #[test]
    fn computes_statistics_for_valid_pair() {
        let handler = ComputeStatisticsHandler::default();
        let result = handler
            .handle(command(
                json!([[1, 0], [0, 1]]),
                json!([[2, 3], [0, 4.0]]),
            ))
            .unwrap();

        assert_eq!(result.max, 4.0);
        assert_eq!(result.min, 0.0);
        assert_eq!(result.sum, 11.0);
        assert_eq!(result.average, 11.0 / 8.0);
        assert_eq!(result.is_diagonal, DiagonalFlags { q: true, r: false });
    }

    #[test]
    fn empty_pair_is_not_an_error() {
        let handler = ComputeStatisticsHandler::default();
        let result = handler.handle(command(json!([]), json!([]))).unwrap();
        assert_eq!(result, StatisticsResult::EMPTY);
    }

    #[test]
    fn non_numeric_q_cell_is_rejected_as_value_error() {
        let handler = ComputeStatisticsHandler::default();
        let err = handler
            .handle(command(json!([["x", 0]]), json!([[1]])))
            .unwrap_err();

        assert_eq!(err.kind(), MatrixErrorKind::Value);
        assert_eq!(err.field(), "Q");
    }

    #[test]
    fn non_grid_r_is_rejected_before_aggregation() {
        let handler = ComputeStatisticsHandler::default();
        let err = handler
            .handle(command(json!([[1]]), json!("invalid")))
            .unwrap_err();

        assert_eq!(err.field(), "R");
    }

    #[test]
    fn ragged_r_is_rejected_as_shape_error() {
        let handler = ComputeStatisticsHandler::default();
        let err = handler
            .handle(command(json!([[1]]), json!([[1, 2], [3]])))
            .unwrap_err();

        assert_eq!(err.kind(), MatrixErrorKind::Shape);
        assert_eq!(err.field(), "R");
    }

    #[test]
    fn configured_tolerance_flows_through() {
        let handler = ComputeStatisticsHandler::new(StatisticsAggregator::new(0.5));
        let result = handler
            .handle(command(json!([[1, 0.4]]), json!([[1, 0.6]])))
            .unwrap();

        assert_eq!(result.is_diagonal, DiagonalFlags { q: true, r: false });
    }
}
