//! Property-based tests for the generators and the coordinate writer.

use matgen::{mtx, tridiagonal, IndexRange, MatrixFactory};
use proptest::prelude::*;

proptest! {
    #[test]
    fn dense_file_has_header_plus_one_line_per_cell(
        rows in 1usize..20,
        cols in 1usize..20,
        seed in any::<u64>(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dense.mtx");

        let mut factory = MatrixFactory::from_seed(seed);
        let matrix = factory.dense(rows, cols).unwrap();
        mtx::write_dense(&path, &matrix).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        prop_assert_eq!(lines.len(), rows * cols + 1);
        prop_assert_eq!(lines[0], format!("{} {} {}", rows, cols, rows * cols));
    }

    #[test]
    fn sparse_file_has_header_plus_one_line_per_triple(
        rows in 1usize..30,
        cols in 1usize..30,
        count in 0usize..200,
        seed in any::<u64>(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.mtx");

        let mut factory = MatrixFactory::from_seed(seed);
        let matrix = factory.sparse_with_count(rows, cols, count).unwrap();
        mtx::write_sparse(&path, &matrix).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        prop_assert_eq!(lines.len(), count + 1);
        prop_assert_eq!(lines[0], format!("{} {} {}", rows, cols, count));
    }

    #[test]
    fn first_triple_is_always_the_pivot(
        rows in 1usize..50,
        cols in 1usize..50,
        count in 1usize..100,
        seed in any::<u64>(),
    ) {
        let mut factory = MatrixFactory::from_seed(seed);
        let matrix = factory.sparse_with_count(rows, cols, count).unwrap();

        let (row, col, &value) = matrix.iter().next().unwrap();
        prop_assert_eq!((row, col), (0, 0));
        prop_assert!((0.1..1.1).contains(&value));
    }

    #[test]
    fn density_count_is_floored(
        rows in 1usize..40,
        cols in 1usize..40,
        density in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut factory = MatrixFactory::from_seed(seed);
        let matrix = factory.sparse_with_density(rows, cols, density).unwrap();

        let expected = ((rows * cols) as f64 * density).floor() as usize;
        prop_assert_eq!(matrix.nnz(), expected);
    }

    #[test]
    fn sampled_coordinates_respect_the_configured_range(
        rows in 2usize..50,
        cols in 2usize..50,
        count in 2usize..200,
        seed in any::<u64>(),
        full in any::<bool>(),
    ) {
        let range = if full { IndexRange::Full } else { IndexRange::Legacy };
        let mut factory = MatrixFactory::from_seed(seed).index_range(range);
        let matrix = factory.sparse_with_count(rows, cols, count).unwrap();

        for (row, col, _) in matrix.iter().skip(1) {
            prop_assert!(row < rows && col < cols);
            if !full {
                prop_assert!(row >= 1 && col >= 1);
            }
        }
    }

    #[test]
    fn tridiagonal_triple_count_is_derived_not_assumed(n in 2usize..200) {
        let matrix = tridiagonal(n).unwrap();
        // 3n - 2: n on the main diagonal, n - 1 on each neighbor.
        prop_assert_eq!(matrix.nnz(), 3 * n - 2);

        for (row, col, &value) in matrix.iter() {
            let on_stencil = match col as isize - row as isize {
                -1 | 1 => value == 1.0,
                0 => value == -2.0,
                _ => false,
            };
            prop_assert!(on_stencil, "unexpected entry ({}, {}, {})", row, col, value);
        }
    }

    #[test]
    fn sparse_round_trip_preserves_triples(
        rows in 1usize..20,
        cols in 1usize..20,
        count in 0usize..60,
        seed in any::<u64>(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.mtx");

        let mut factory = MatrixFactory::from_seed(seed);
        let matrix = factory.sparse_with_count(rows, cols, count).unwrap();
        mtx::write_sparse(&path, &matrix).unwrap();

        let loaded = mtx::read_sparse(&path).unwrap();
        prop_assert_eq!(loaded.n_rows, rows);
        prop_assert_eq!(loaded.n_cols, cols);
        prop_assert_eq!(loaded.row_idx, matrix.row_idx);
        prop_assert_eq!(loaded.col_idx, matrix.col_idx);
        // Truncation to 20 fractional digits bounds the error at 5e-21.
        for (read, written) in loaded.values.iter().zip(&matrix.values) {
            prop_assert!((read - written).abs() < 1e-15);
        }
    }
}
