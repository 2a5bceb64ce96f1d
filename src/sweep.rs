//! Sweep driver: iterates configured size and density grids and writes
//! matrix instances for the benchmark runner.
//!
//! Configuration is explicit — there is no process-wide state. Each swept
//! point is independent: a failure is logged and the sweep continues, so one
//! bad configuration cannot sink a long run.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenError;
use crate::generate::{tridiagonal, IndexRange, MatrixFactory};
use crate::mtx;

/// Parameters for one full generation sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Base directory; `dense/`, `sparse/`, `sparse-vs-dense/` and
    /// `toeplitz/` subdirectories are created beneath it.
    pub output_dir: PathBuf,
    /// Number of instances generated per swept point.
    pub examples: usize,
    /// RNG seed; the stream advances sequentially across the whole sweep.
    pub seed: u64,
    /// Coordinate sampling bound for the random sparse generators.
    pub index_range: IndexRange,
    /// Square dimensions for the dense size sweep.
    pub dense_sizes: Vec<usize>,
    /// Square dimensions for the sparse size sweep, at `sparse_density`.
    pub sparse_sizes: Vec<usize>,
    pub sparse_density: f64,
    /// Fixed dimension for the density sweep.
    pub mixed_size: usize,
    /// Densities swept at `mixed_size`.
    pub mixed_densities: Vec<f64>,
    /// Dimensions for the deterministic tridiagonal instances.
    pub diagonal_sizes: Vec<usize>,
    /// Also write the reference product C = A*B for each pair.
    pub write_product: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("matrix_instances/generated"),
            examples: 1,
            seed: 42,
            index_range: IndexRange::default(),
            dense_sizes: (1..=10).map(|k| k * 50).collect(),
            sparse_sizes: (5..=30).map(|k| k * 100).collect(),
            sparse_density: 0.001,
            mixed_size: 500,
            mixed_densities: (1..=19).map(|k| k as f64 / 20.0).collect(),
            diagonal_sizes: vec![100, 1000],
            write_product: false,
        }
    }
}

/// Counts of what a sweep produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Files written.
    pub written: usize,
    /// Swept points skipped after an error.
    pub failed: usize,
}

/// Runs the full sweep, returning how many files were written.
///
/// Only directory creation aborts the sweep; per-point errors are logged and
/// counted in the summary.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepSummary, GenError> {
    let mut factory = MatrixFactory::from_seed(config.seed).index_range(config.index_range);
    let mut summary = SweepSummary::default();
    let width = config.examples.to_string().len();

    let dense_dir = config.output_dir.join("dense");
    let sparse_dir = config.output_dir.join("sparse");
    let mixed_dir = config.output_dir.join("sparse-vs-dense");
    fs::create_dir_all(&dense_dir)?;
    fs::create_dir_all(&sparse_dir)?;
    fs::create_dir_all(&mixed_dir)?;

    for example in 0..config.examples {
        let tag = format!("{:0width$}", example, width = width);

        for &n in &config.dense_sizes {
            sweep_point(
                &mut summary,
                &format!("dense size {}", n),
                dense_pair(&mut factory, &dense_dir, n, &tag, config.write_product),
            );
        }

        for &n in &config.sparse_sizes {
            let prefix = format!("sparse_{}", n);
            sweep_point(
                &mut summary,
                &format!("sparse size {}", n),
                sparse_pair(
                    &mut factory,
                    &sparse_dir,
                    &prefix,
                    n,
                    config.sparse_density,
                    &tag,
                    config.write_product,
                ),
            );
        }

        for &density in &config.mixed_densities {
            let prefix = format!("s-vs-d_{}", density);
            sweep_point(
                &mut summary,
                &format!("density {}", density),
                sparse_pair(
                    &mut factory,
                    &mixed_dir,
                    &prefix,
                    config.mixed_size,
                    density,
                    &tag,
                    config.write_product,
                ),
            );
        }
    }

    if !config.diagonal_sizes.is_empty() {
        let diagonal_dir = config.output_dir.join("toeplitz");
        fs::create_dir_all(&diagonal_dir)?;
        for &n in &config.diagonal_sizes {
            sweep_point(
                &mut summary,
                &format!("tridiagonal size {}", n),
                write_tridiagonal(&diagonal_dir, n),
            );
        }
    }

    info!(
        "sweep complete: {} files written, {} points failed",
        summary.written, summary.failed
    );
    Ok(summary)
}

fn sweep_point(summary: &mut SweepSummary, what: &str, outcome: Result<usize, GenError>) {
    match outcome {
        Ok(written) => summary.written += written,
        Err(err) => {
            warn!("skipping {}: {}", what, err);
            summary.failed += 1;
        }
    }
}

fn dense_pair<R: Rng>(
    factory: &mut MatrixFactory<R>,
    dir: &Path,
    n: usize,
    tag: &str,
    with_product: bool,
) -> Result<usize, GenError> {
    let a = factory.dense(n, n)?;
    let b = factory.dense(n, n)?;

    mtx::write_dense(dir.join(format!("dense_{}_A{}.mtx", n, tag)), &a)?;
    mtx::write_dense(dir.join(format!("dense_{}_B{}.mtx", n, tag)), &b)?;
    if !with_product {
        return Ok(2);
    }

    let c = a.dot(&b);
    mtx::write_dense(dir.join(format!("dense_{}_C{}.mtx", n, tag)), &c)?;
    Ok(3)
}

fn sparse_pair<R: Rng>(
    factory: &mut MatrixFactory<R>,
    dir: &Path,
    prefix: &str,
    n: usize,
    density: f64,
    tag: &str,
    with_product: bool,
) -> Result<usize, GenError> {
    let a = factory.sparse_with_density(n, n, density)?;
    let b = factory.sparse_with_density(n, n, density)?;

    mtx::write_sparse(dir.join(format!("{}_A{}.mtx", prefix, tag)), &a)?;
    mtx::write_sparse(dir.join(format!("{}_B{}.mtx", prefix, tag)), &b)?;
    if !with_product {
        return Ok(2);
    }

    let c = a.multiply(&b);
    mtx::write_sparse(dir.join(format!("{}_C{}.mtx", prefix, tag)), &c)?;
    Ok(3)
}

fn write_tridiagonal(dir: &Path, n: usize) -> Result<usize, GenError> {
    let matrix = tridiagonal(n)?;
    mtx::write_sparse(dir.join(format!("toeplitz_{}_A.mtx", n)), &matrix)?;
    Ok(1)
}

/// Parameters for random rectangular test cases with a reference product.
#[derive(Debug, Clone)]
pub struct CaseConfig {
    /// Filename stem: `<name>_<case>_{A,B,C}.mtx`.
    pub name: String,
    /// Number of A, B, C triples to generate.
    pub cases: usize,
    /// Upper bound (inclusive) on each drawn dimension.
    pub max_size: usize,
    /// Upper bound on the drawn density.
    pub max_density: f64,
    pub output_dir: PathBuf,
    pub seed: u64,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            name: "case".to_string(),
            cases: 10,
            max_size: 100,
            max_density: 0.2,
            output_dir: PathBuf::from("matrix_instances/generated"),
            seed: 42,
        }
    }
}

/// Generates `cases` random A (n×m), B (m×l) pairs with C = A*B.
///
/// Shapes and densities are drawn from a stream of their own so a case count
/// change does not shift the matrix entries.
pub fn generate_cases(config: &CaseConfig) -> Result<usize, GenError> {
    if config.max_size < 1 {
        return Err(GenError::InvalidShape {
            rows: config.max_size,
            cols: config.max_size,
        });
    }
    if !(0.0..=1.0).contains(&config.max_density) {
        return Err(GenError::InvalidDensity(config.max_density));
    }
    fs::create_dir_all(&config.output_dir)?;

    let mut factory = MatrixFactory::from_seed(config.seed);
    let mut shapes = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(1000));
    let mut written = 0;

    for case in 0..config.cases {
        let n = shapes.gen_range(1..=config.max_size);
        let m = shapes.gen_range(1..=config.max_size);
        let l = shapes.gen_range(1..=config.max_size);
        let density = shapes.gen::<f64>() * config.max_density;

        let a = factory.sparse_with_density(n, m, density)?;
        let b = factory.sparse_with_density(m, l, density)?;
        let c = a.multiply(&b);

        let stem = |part| config.output_dir.join(format!("{}_{:04}_{}.mtx", config.name, case, part));
        mtx::write_sparse(stem("A"), &a)?;
        mtx::write_sparse(stem("B"), &b)?;
        mtx::write_sparse(stem("C"), &c)?;
        written += 3;

        info!(
            "case {:04}: A {}x{} ({} nnz), B {}x{} ({} nnz), C {} nnz",
            case,
            n,
            m,
            a.nnz(),
            m,
            l,
            b.nnz(),
            c.nnz()
        );
    }

    Ok(written)
}
