//! # matgen: synthetic matrix instances for multiplication benchmarks
//!
//! This library generates dense and sparse random matrices at controllable
//! size and density, serializes them to a plain-text coordinate format, and
//! aggregates benchmark timing CSVs into comparison charts.
//!
//! ## Components
//!
//! 1. **Generation** ([`generate`]): a [`MatrixFactory`] with an injectable,
//!    seedable random source produces dense arrays and coordinate-list
//!    sparse matrices; [`tridiagonal`] builds the deterministic discrete
//!    Laplacian instances.
//!
//! 2. **Serialization** ([`mtx`]): the coordinate text format used by the
//!    benchmark runner — a `rows cols entries` header followed by 1-indexed
//!    `row col value` lines with 20 fractional digits.
//!
//! 3. **Sweeps** ([`sweep`]): iterates configured size/density grids and
//!    writes instance files for matrices A and B (optionally C = A*B).
//!
//! 4. **Reports** ([`report`]): averages timing CSVs per matrix size and
//!    renders one comparison chart.
//!
//! ## Usage
//!
//! Generate a small sparse matrix and write it out:
//!
//! ```no_run
//! use matgen::{mtx, MatrixFactory};
//!
//! let mut factory = MatrixFactory::from_seed(42);
//! let matrix = factory.sparse_with_density(100, 100, 0.05)?;
//! mtx::write_sparse("sparse_100_A.mtx", &matrix)?;
//! # Ok::<(), matgen::GenError>(())
//! ```

pub mod error;
pub mod generate;
pub mod matrix;
pub mod mtx;
pub mod report;
pub mod sweep;

// Re-export primary components
pub use error::{GenError, ReportError};
pub use generate::{diagonals, tridiagonal, IndexRange, MatrixFactory};
pub use matrix::{CooMatrix, DenseMatrix};
pub use report::{aggregate, extract_size, render_chart, PlotKind, TimingSummary};
pub use sweep::{generate_cases, run_sweep, CaseConfig, SweepConfig, SweepSummary};

/// Version information for the matgen library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
