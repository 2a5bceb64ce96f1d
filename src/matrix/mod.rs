//! Matrix data model: coordinate-list (COO) storage plus dense arrays.
//!
//! Dense matrices are plain `ndarray::Array2<f64>` in row-major (standard)
//! layout; sparse matrices use [`CooMatrix`], which preserves insertion order
//! and permits duplicate coordinates.

mod coo;

pub use coo::CooMatrix;

/// Dense matrix type used throughout the crate.
pub type DenseMatrix = ndarray::Array2<f64>;
