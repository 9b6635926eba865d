//! Aggregate statistics over a pair of factor matrices.

use serde::{Deserialize, Serialize};

use super::diagonality::{is_diagonal, DEFAULT_TOLERANCE};
use super::matrix::Matrix;

/// Per-factor diagonality flags, serialized as `{ "Q": bool, "R": bool }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagonalFlags {
    #[serde(rename = "Q")]
    pub q: bool,
    #[serde(rename = "R")]
    pub r: bool,
}

/// Statistics computed over the combined cells of Q and R.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResult {
    pub max: f64,
    pub min: f64,
    pub sum: f64,
    pub average: f64,
    pub is_diagonal: DiagonalFlags,
}

impl StatisticsResult {
    /// Result reported when Q and R hold no cells between them.
    ///
    /// The diagonality flags are `false` here even though an empty matrix is
    /// vacuously diagonal. Clients already depend on this shape.
    pub const EMPTY: Self = Self {
        max: 0.0,
        min: 0.0,
        sum: 0.0,
        average: 0.0,
        is_diagonal: DiagonalFlags { q: false, r: false },
    };
}

/// Computes [`StatisticsResult`] for validated matrices.
///
/// Holds only the diagonality tolerance, fixed at construction from
/// configuration. Stateless across calls, so one instance can be shared by
/// every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsAggregator {
    tolerance: f64,
}

impl StatisticsAggregator {
    /// Creates an aggregator with the given off-diagonal tolerance.
    ///
    /// The tolerance is expected to be finite and positive; configuration
    /// validation enforces that before this is called.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Computes max, min, sum and average over every cell of `q` and `r`,
    /// plus the diagonality of each.
    ///
    /// # Edge Cases
    /// - No cells in either matrix: returns [`StatisticsResult::EMPTY`]
    /// - One matrix empty: statistics come from the other alone, and the
    ///   empty one is reported diagonal
    pub fn aggregate(&self, q: &Matrix, r: &Matrix) -> StatisticsResult {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;

        for value in q.values().chain(r.values()) {
            count += 1;
            sum += value;
            max = max.max(value);
            min = min.min(value);
        }

        if count == 0 {
            return StatisticsResult::EMPTY;
        }

        StatisticsResult {
            max,
            min,
            sum,
            average: sum / count as f64,
            is_diagonal: DiagonalFlags {
                q: is_diagonal(q, self.tolerance),
                r: is_diagonal(r, self.tolerance),
            },
        }
    }
}

impl Default for StatisticsAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}
