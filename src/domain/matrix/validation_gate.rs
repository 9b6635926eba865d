//! Boundary checks run before any statistic is computed.

use serde_json::Value;

use super::errors::MatrixError;
use super::matrix::Matrix;

/// Reads a JSON value as a grid of numbers without checking rectangularity.
///
/// # Errors
///
/// - `NotAGrid` if the value is not an array
/// - `RowNotArray` if any element is not an array
/// - `NotANumber` if any cell is not a JSON number
pub fn parse_grid(field: &'static str, value: &Value) -> Result<Vec<Vec<f64>>, MatrixError> {
    let rows = value.as_array().ok_or(MatrixError::NotAGrid { field })?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = row
                .as_array()
                .ok_or(MatrixError::RowNotArray { field, row: i })?;
            cells
                .iter()
                .enumerate()
                .map(|(j, cell)| {
                    cell.as_f64().ok_or(MatrixError::NotANumber {
                        field,
                        row: i,
                        col: j,
                    })
                })
                .collect()
        })
        .collect()
}

/// Validates a Q/R pair before aggregation.
///
/// Either both matrices come back unchanged or nothing does. Empty matrices
/// pass; the aggregator owns the policy for them.
pub struct ValidationGate;

impl ValidationGate {
    /// Validates already-decoded grids.
    ///
    /// # Errors
    ///
    /// Returns the first `Ragged` or `NonFinite` failure, checking Q first.
    pub fn validate(
        q: Vec<Vec<f64>>,
        r: Vec<Vec<f64>>,
    ) -> Result<(Matrix, Matrix), MatrixError> {
        let q = Matrix::try_new("Q", q)?;
        let r = Matrix::try_new("R", r)?;
        Ok((q, r))
    }

    /// Validates raw wire values.
    ///
    /// Adds the structural checks of [`parse_grid`] on top of
    /// [`ValidationGate::validate`].
    pub fn validate_json(q: &Value, r: &Value) -> Result<(Matrix, Matrix), MatrixError> {
        let q = parse_grid("Q", q)?;
        let r = parse_grid("R", r)?;
        Self::validate(q, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_grid_reads_integers_and_floats() {
        let grid = parse_grid("Q", &json!([[1, 2.5], [-3, 0]])).unwrap();
        assert_eq!(grid, vec![vec![1.0, 2.5], vec![-3.0, 0.0]]);
    }

    #[test]
    fn parse_grid_allows_ragged_rows() {
        let grid = parse_grid("matrix", &json!([[1, 2], [3]])).unwrap();
        assert_eq!(grid, vec![vec![1.0, 2.0], vec![3.0]]);
    }

    #[test]
    fn parse_grid_rejects_string() {
        assert_eq!(
            parse_grid("Q", &json!("invalid")),
            Err(MatrixError::NotAGrid { field: "Q" })
        );
    }

    #[test]
    fn parse_grid_rejects_flat_array() {
        assert_eq!(
            parse_grid("R", &json!([1, 2, 3])),
            Err(MatrixError::RowNotArray { field: "R", row: 0 })
        );
    }

    #[test]
    fn parse_grid_rejects_non_numeric_cell() {
        assert_eq!(
            parse_grid("Q", &json!([[1, 2], [3, "4"]])),
            Err(MatrixError::NotANumber {
                field: "Q",
                row: 1,
                col: 1,
            })
        );
        assert!(parse_grid("Q", &json!([[null]])).is_err());
    }

    #[test]
    fn validate_returns_matrices_unchanged() {
        let q = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let r = vec![vec![2.0, 3.0], vec![0.0, 4.0]];
        let (vq, vr) = ValidationGate::validate(q.clone(), r.clone()).unwrap();
        assert_eq!(vq.rows(), q.as_slice());
        assert_eq!(vr.rows(), r.as_slice());
    }

    #[test]
    fn validate_rejects_nan_in_q() {
        let result = ValidationGate::validate(vec![vec![f64::NAN]], vec![vec![1.0]]);
        assert!(matches!(
            result,
            Err(MatrixError::NonFinite { field: "Q", .. })
        ));
    }

    #[test]
    fn validate_rejects_ragged_r() {
        let result = ValidationGate::validate(vec![vec![1.0]], vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(MatrixError::Ragged { field: "R", .. })));
    }

    #[test]
    fn validate_accepts_empty_pair() {
        let (q, r) = ValidationGate::validate(vec![], vec![]).unwrap();
        assert!(q.is_empty());
        assert!(r.is_empty());
    }

    #[test]
    fn validate_json_rejects_invalid_strings() {
        let result = ValidationGate::validate_json(&json!("invalid"), &json!("invalid"));
        assert_eq!(result, Err(MatrixError::NotAGrid { field: "Q" }));
    }

    #[test]
    fn validate_json_rejects_ragged_even_though_parse_allows_it() {
        let result = ValidationGate::validate_json(&json!([[1, 2], [3]]), &json!([]));
        assert!(matches!(result, Err(MatrixError::Ragged { field: "Q", .. })));
    }
}
