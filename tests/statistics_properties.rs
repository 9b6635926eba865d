//! Property tests for the statistics engine.

use proptest::prelude::*;

use qr_stats::domain::matrix::{
    ensure_submittable, is_diagonal, normalize, Matrix, StatisticsAggregator, StatisticsResult,
    DEFAULT_TOLERANCE,
};

fn grid(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    (0..=max_rows, 1..=max_cols).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(-1.0e6..1.0e6f64, cols), rows)
    })
}

fn ragged(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(-1.0e3..1.0e3f64, 0..=max_cols), 0..=max_rows)
}

fn matrix(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Matrix> {
    grid(max_rows, max_cols).prop_map(|rows| Matrix::try_new("Q", rows).unwrap())
}

proptest! {
    #[test]
    fn max_and_min_bound_every_cell(q in matrix(6, 6), r in matrix(6, 6)) {
        let result = StatisticsAggregator::default().aggregate(&q, &r);

        if q.is_empty() && r.is_empty() {
            prop_assert_eq!(result, StatisticsResult::EMPTY);
        } else {
            for value in q.values().chain(r.values()) {
                prop_assert!(result.max >= value);
                prop_assert!(result.min <= value);
            }
        }
    }

    #[test]
    fn average_is_sum_over_cell_count(q in matrix(6, 6), r in matrix(6, 6)) {
        let result = StatisticsAggregator::default().aggregate(&q, &r);
        let count = q.values().count() + r.values().count();

        prop_assume!(count > 0);
        let expected_sum = q.values().chain(r.values()).fold(0.0, |acc, v| acc + v);
        prop_assert_eq!(result.sum, expected_sum);
        prop_assert_eq!(result.average, expected_sum / count as f64);
    }

    #[test]
    fn aggregation_is_idempotent(q in matrix(5, 5), r in matrix(5, 5)) {
        let aggregator = StatisticsAggregator::default();
        let first = aggregator.aggregate(&q, &r);
        let second = aggregator.aggregate(&q, &r);

        prop_assert_eq!(first.max.to_bits(), second.max.to_bits());
        prop_assert_eq!(first.min.to_bits(), second.min.to_bits());
        prop_assert_eq!(first.sum.to_bits(), second.sum.to_bits());
        prop_assert_eq!(first.average.to_bits(), second.average.to_bits());
        prop_assert_eq!(first.is_diagonal, second.is_diagonal);
    }

    #[test]
    fn identity_is_always_diagonal(n in 1usize..20) {
        prop_assert!(is_diagonal(&Matrix::identity(n), DEFAULT_TOLERANCE));
    }

    #[test]
    fn any_significant_off_diagonal_breaks_diagonality(
        n in 2usize..8,
        i in 0usize..8,
        j in 0usize..8,
        value in 1.0e-9..1.0e3f64,
    ) {
        let (i, j) = (i % n, j % n);
        prop_assume!(i != j);
        let mut rows = Matrix::identity(n).into_rows();
        rows[i][j] = value;

        let matrix = Matrix::try_new("Q", rows).unwrap();
        prop_assert!(!is_diagonal(&matrix, DEFAULT_TOLERANCE));
    }

    #[test]
    fn normalize_is_rectangular_and_idempotent(rows in ragged(6, 6)) {
        let normalized = normalize(&rows);
        let width = normalized.first().map_or(0, Vec::len);

        prop_assert_eq!(normalized.len(), rows.len());
        prop_assert!(normalized.iter().all(|row| row.len() == width));
        for (original, padded) in rows.iter().zip(&normalized) {
            prop_assert_eq!(&padded[..original.len()], original.as_slice());
            prop_assert!(padded[original.len()..].iter().all(|v| *v == 0.0));
        }
        prop_assert_eq!(normalize(&normalized), normalized.clone());
    }

    #[test]
    fn submission_requires_rows_at_least_cols(rows in 1usize..6, cols in 1usize..6) {
        let matrix = Matrix::try_new("matrix", vec![vec![1.0; cols]; rows]).unwrap();

        prop_assert_eq!(ensure_submittable("matrix", &matrix).is_ok(), rows >= cols);
    }
}
