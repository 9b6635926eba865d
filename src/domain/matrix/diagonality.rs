//! Off-diagonal magnitude check.

use super::matrix::Matrix;

/// Default magnitude at or below which an off-diagonal cell counts as zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Returns true when every cell with `row != col` has `|value| <= tolerance`.
///
/// Non-square matrices use the same index rule, so a tall matrix whose
/// extra rows are all negligible is still diagonal. Stops at the first
/// violating cell.
pub fn is_diagonal(matrix: &Matrix, tolerance: f64) -> bool {
    matrix
        .cells()
        .all(|(i, j, value)| i == j || value.abs() <= tolerance)
}
