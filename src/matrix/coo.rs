//! Coordinate-list (COO) sparse matrix format
//!
//! The COO format stores a sparse matrix using three parallel arrays:
//! - row_idx: Array of size nnz containing row indices of stored entries
//! - col_idx: Array of size nnz containing column indices of stored entries
//! - values: Array of size nnz containing the stored values
//!
//! Entries are kept in insertion order, matching the order they are written
//! to the coordinate text format. Duplicate (row, col) pairs are allowed:
//! the random generators do not deduplicate, and consumers that need
//! canonical storage sum duplicates (see [`CooMatrix::to_dense`]).

use std::collections::HashMap;
use std::fmt;
use std::ops::AddAssign;

use ndarray::Array2;
use num_traits::Num;

/// A sparse matrix as an ordered list of `(row, col, value)` triples.
#[derive(Clone)]
pub struct CooMatrix<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row indices (size: nnz), 0-indexed
    pub row_idx: Vec<usize>,

    /// Column indices (size: nnz), 0-indexed
    pub col_idx: Vec<usize>,

    /// Stored values (size: nnz)
    pub values: Vec<T>,
}

impl<T> CooMatrix<T>
where
    T: Copy + Num,
{
    /// Creates an empty matrix of the given shape with room for `nnz` entries.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_capacity(n_rows: usize, n_cols: usize, nnz: usize) -> Self {
        assert!(n_rows >= 1 && n_cols >= 1, "matrix dimensions must be at least 1x1");

        Self {
            n_rows,
            n_cols,
            row_idx: Vec::with_capacity(nnz),
            col_idx: Vec::with_capacity(nnz),
            values: Vec::with_capacity(nnz),
        }
    }

    /// Appends a triple, preserving insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn push(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.n_rows, "row index {} out of bounds (n_rows = {})", row, self.n_rows);
        assert!(col < self.n_cols, "column index {} out of bounds (n_cols = {})", col, self.n_cols);

        self.row_idx.push(row);
        self.col_idx.push(col);
        self.values.push(value);
    }

    /// Returns the number of stored entries.
    ///
    /// Duplicates count separately, so this can exceed the number of distinct
    /// non-zero positions.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over stored triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.row_idx
            .iter()
            .zip(&self.col_idx)
            .zip(&self.values)
            .map(|((&row, &col), value)| (row, col, value))
    }
}

impl<T> CooMatrix<T>
where
    T: Copy + Num + AddAssign,
{
    /// Expands to a dense array, summing duplicate coordinates.
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::from_elem((self.n_rows, self.n_cols), T::zero());
        for (row, col, &value) in self.iter() {
            dense[(row, col)] += value;
        }
        dense
    }

    /// Computes the product `self * other` with a row-by-row hashmap
    /// accumulator.
    ///
    /// Duplicate input coordinates contribute additively. The result holds
    /// one triple per non-zero output position, in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions do not match.
    pub fn multiply(&self, other: &CooMatrix<T>) -> CooMatrix<T> {
        assert_eq!(
            self.n_cols, other.n_rows,
            "Matrix dimensions must be compatible for multiplication"
        );

        // Group the right-hand side by row for random access.
        let mut rhs_rows: Vec<Vec<(usize, T)>> = vec![Vec::new(); other.n_rows];
        for (row, col, &value) in other.iter() {
            rhs_rows[row].push((col, value));
        }

        // One accumulator per output row.
        let mut accum: Vec<HashMap<usize, T>> = vec![HashMap::new(); self.n_rows];
        for (row, inner, &lhs_value) in self.iter() {
            for &(col, rhs_value) in &rhs_rows[inner] {
                *accum[row].entry(col).or_insert_with(T::zero) += lhs_value * rhs_value;
            }
        }

        let mut result = CooMatrix::with_capacity(self.n_rows, other.n_cols, 0);
        for (row, row_accum) in accum.into_iter().enumerate() {
            let mut entries: Vec<_> = row_accum.into_iter().collect();
            entries.sort_unstable_by_key(|&(col, _)| col);

            for (col, value) in entries {
                if !value.is_zero() {
                    result.push(row, col, value);
                }
            }
        }

        result
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for CooMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CooMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_entries = 5.min(self.nnz());
        if max_entries > 0 {
            writeln!(f, "  content sample:")?;
            for (row, col, value) in self.iter().take(max_entries) {
                writeln!(f, "    ({}, {}, {:?})", row, col, value)?;
            }
            if self.nnz() > max_entries {
                writeln!(f, "    ... ({} more entries)", self.nnz() - max_entries)?;
            }
        }

        write!(f, "}}")
    }
}
