//! Normalization of edited grids and the submission precondition.

use super::errors::MatrixError;
use super::matrix::Matrix;

/// Pads every row on the right with zeros up to the longest row's length.
///
/// Pure and idempotent: normalizing an already rectangular grid returns an
/// equal copy. An empty input yields an empty output.
pub fn normalize(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    rows.iter()
        .map(|row| {
            let mut padded = Vec::with_capacity(width);
            padded.extend_from_slice(row);
            padded.resize(width, 0.0);
            padded
        })
        .collect()
}

/// Checks that a matrix may be sent to the factorization service.
///
/// The service needs a tall-or-square, non-empty matrix.
///
/// # Errors
///
/// - `Empty` if the matrix has zero rows or zero columns
/// - `TooWide` if it has fewer rows than columns
pub fn ensure_submittable(field: &'static str, matrix: &Matrix) -> Result<(), MatrixError> {
    let dims = matrix.dimensions();

    if dims.is_degenerate() {
        return Err(MatrixError::Empty { field });
    }
    if dims.rows < dims.cols {
        return Err(MatrixError::TooWide {
            field,
            rows: dims.rows,
            cols: dims.cols,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_pads_short_rows_with_zero() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(normalize(&rows), vec![vec![1.0, 2.0], vec![3.0, 0.0]]);
    }

    #[test]
    fn normalize_uses_longest_row_not_first() {
        let rows = vec![vec![1.0], vec![], vec![2.0, 3.0, 4.0]];
        assert_eq!(
            normalize(&rows),
            vec![vec![1.0, 0.0, 0.0], vec![0.0, 0.0, 0.0], vec![2.0, 3.0, 4.0]]
        );
    }

    #[test]
    fn normalize_empty_is_empty() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn normalize_all_empty_rows_keeps_row_count() {
        let rows = vec![vec![], vec![]];
        assert_eq!(normalize(&rows), vec![Vec::<f64>::new(), Vec::new()]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0], vec![5.0, 6.0]];
        let once = normalize(&rows);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_leaves_input_untouched() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let _ = normalize(&rows);
        assert_eq!(rows[1], vec![3.0]);
    }

    #[test]
    fn submittable_accepts_square_and_tall() {
        let square = Matrix::identity(3);
        let tall = Matrix::try_new("matrix", vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
            .unwrap();
        assert!(ensure_submittable("matrix", &square).is_ok());
        assert!(ensure_submittable("matrix", &tall).is_ok());
    }

    #[test]
    fn submittable_rejects_wide() {
        let wide = Matrix::try_new("matrix", vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
            .unwrap();
        assert_eq!(
            ensure_submittable("matrix", &wide),
            Err(MatrixError::TooWide {
                field: "matrix",
                rows: 2,
                cols: 3,
            })
        );
    }

    #[test]
    fn submittable_rejects_empty() {
        let empty = Matrix::default();
        let no_columns = Matrix::try_new("matrix", vec![vec![]]).unwrap();
        assert_eq!(
            ensure_submittable("matrix", &empty),
            Err(MatrixError::Empty { field: "matrix" })
        );
        assert_eq!(
            ensure_submittable("matrix", &no_columns),
            Err(MatrixError::Empty { field: "matrix" })
        );
    }
}
