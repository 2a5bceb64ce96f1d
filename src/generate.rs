//! Random and structured matrix generators.
//!
//! [`MatrixFactory`] owns its random source so a fixed seed reproduces an
//! entire sweep: the stream is advanced sequentially across calls, and the
//! position after generating matrix A determines the sequence used for
//! matrix B. Tests inject a seeded `ChaCha8Rng` (or any other `Rng`) through
//! [`MatrixFactory::with_rng`].

use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenError;
use crate::matrix::CooMatrix;

/// Sampling bound for random row and column indices.
///
/// The original experiment scripts drew indices with `randint(1, n)`, which
/// never places a random entry in row or column 0: the forced pivot is the
/// only entry that can land there, so density is undercounted along the first
/// row and column. `Legacy` reproduces that behavior; `Full` samples the
/// whole index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexRange {
    /// Indices uniform in `[0, n)`.
    Full,
    /// Indices uniform in `[1, n)`; collapses to 0 when `n == 1`.
    #[default]
    Legacy,
}

impl IndexRange {
    fn sample<R: Rng>(self, rng: &mut R, n: usize) -> usize {
        match self {
            IndexRange::Full => rng.gen_range(0..n),
            IndexRange::Legacy => {
                if n == 1 {
                    0
                } else {
                    rng.gen_range(1..n)
                }
            }
        }
    }
}

/// Produces dense and sparse random matrices from a shape and a fill policy.
pub struct MatrixFactory<R: Rng> {
    rng: R,
    index_range: IndexRange,
}

impl MatrixFactory<ChaCha8Rng> {
    /// Creates a factory with a reproducible ChaCha8 stream.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> MatrixFactory<R> {
    /// Creates a factory around an injected random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            index_range: IndexRange::default(),
        }
    }

    /// Sets the sampling bound used for random coordinates.
    pub fn index_range(mut self, index_range: IndexRange) -> Self {
        self.index_range = index_range;
        self
    }

    /// Fills a `rows x cols` dense matrix with uniform values in `[0, 1)`.
    pub fn dense(&mut self, rows: usize, cols: usize) -> Result<Array2<f64>, GenError> {
        check_shape(rows, cols)?;

        let rng = &mut self.rng;
        Ok(Array2::from_shape_fn((rows, cols), |_| rng.gen::<f64>()))
    }

    /// Emits exactly `count` random triples.
    ///
    /// The first triple is always `(0, 0, v)` with `v` uniform in
    /// `[0.1, 1.1)`, guaranteeing a non-zero pivot. The remaining `count - 1`
    /// triples draw coordinates from the configured [`IndexRange`] and values
    /// uniform in `[0, 1)`. Coordinates are NOT deduplicated; the same
    /// position may appear more than once and downstream consumers resolve
    /// duplicates by summation.
    pub fn sparse_with_count(
        &mut self,
        rows: usize,
        cols: usize,
        count: usize,
    ) -> Result<CooMatrix<f64>, GenError> {
        check_shape(rows, cols)?;

        let mut matrix = CooMatrix::with_capacity(rows, cols, count);
        if count == 0 {
            return Ok(matrix);
        }

        // Offset keeps the pivot away from zero.
        matrix.push(0, 0, self.rng.gen::<f64>() + 0.1);

        for _ in 1..count {
            let row = self.index_range.sample(&mut self.rng, rows);
            let col = self.index_range.sample(&mut self.rng, cols);
            matrix.push(row, col, self.rng.gen());
        }

        Ok(matrix)
    }

    /// Emits `floor(rows * cols * density)` random triples.
    pub fn sparse_with_density(
        &mut self,
        rows: usize,
        cols: usize,
        density: f64,
    ) -> Result<CooMatrix<f64>, GenError> {
        check_shape(rows, cols)?;
        if !(0.0..=1.0).contains(&density) {
            return Err(GenError::InvalidDensity(density));
        }

        let count = ((rows * cols) as f64 * density).floor() as usize;
        self.sparse_with_count(rows, cols, count)
    }
}

/// Builds an `n x n` matrix from constant diagonals, deterministically.
///
/// For each `offsets[k]` one triple `(row, row + offsets[k], values[k])` is
/// emitted per row where the column stays within `[0, n)`. Triples are
/// emitted offset by offset, rows ascending.
pub fn diagonals(n: usize, values: &[f64], offsets: &[isize]) -> Result<CooMatrix<f64>, GenError> {
    check_shape(n, n)?;
    if values.len() != offsets.len() {
        return Err(GenError::ShapeMismatch {
            values: values.len(),
            offsets: offsets.len(),
        });
    }

    let mut matrix = CooMatrix::with_capacity(n, n, values.len() * n);
    for (&value, &offset) in values.iter().zip(offsets) {
        for row in 0..n {
            let col = row as isize + offset;
            if (0..n as isize).contains(&col) {
                matrix.push(row, col as usize, value);
            }
        }
    }

    Ok(matrix)
}

/// The discrete Laplacian: -2 on the main diagonal, 1 on both neighbors.
pub fn tridiagonal(n: usize) -> Result<CooMatrix<f64>, GenError> {
    diagonals(n, &[1.0, -2.0, 1.0], &[-1, 0, 1])
}

fn check_shape(rows: usize, cols: usize) -> Result<(), GenError> {
    if rows < 1 || cols < 1 {
        return Err(GenError::InvalidShape { rows, cols });
    }
    Ok(())
}
