//! Matrix value object: a rectangular grid of finite reals.

use serde::Serialize;
use std::fmt;

use super::errors::MatrixError;
use super::normalizer::normalize;

/// Row and column counts of a [`Matrix`].
///
/// Always derived from the rows on demand, never stored alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    /// True when there are no cells at all (zero rows or zero columns).
    pub fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// An immutable rectangular grid of finite `f64` values.
///
/// Construction is the only place the invariants are checked: every row has
/// the same length and every cell is finite. A matrix with zero rows is a
/// valid value; whether it may be submitted or aggregated is decided by the
/// callers.
///
/// Serializes as a plain array of arrays.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Builds a matrix from rows that must already be rectangular.
    ///
    /// # Errors
    ///
    /// - `Ragged` if any row length differs from the first row
    /// - `NonFinite` if any cell is NaN or infinite
    pub fn try_new(field: &'static str, rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let expected = rows.first().map_or(0, Vec::len);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(MatrixError::Ragged {
                    field,
                    row: i,
                    expected,
                    actual: row.len(),
                });
            }
            if let Some((j, &value)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(MatrixError::NonFinite {
                    field,
                    row: i,
                    col: j,
                    value,
                });
            }
        }

        Ok(Self { rows })
    }

    /// Builds a matrix from possibly ragged rows by zero-padding them first.
    pub fn from_ragged(field: &'static str, rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        Self::try_new(field, normalize(rows))
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Self { rows }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            rows: self.rows.len(),
            cols: self.rows.first().map_or(0, Vec::len),
        }
    }

    /// True when the matrix holds no cells.
    pub fn is_empty(&self) -> bool {
        self.dimensions().is_degenerate()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Iterates over all cells in row-major order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Iterates over `(row, col, value)` triples in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &v)| (i, j, v)))
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}
