//! Matrix instance generation CLI.
//!
//! Subcommands cover the three generation modes: grid sweeps over sizes and
//! densities, random rectangular cases with a reference product, and the
//! deterministic tridiagonal instances.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::{error, info};
use matgen::{generate_cases, mtx, run_sweep, tridiagonal, CaseConfig, GenError, IndexRange, SweepConfig};

#[derive(Parser)]
#[command(name = "genmat", version, about = "Generate matrix instances for multiplication benchmarks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sweep size and density grids, writing A/B pairs per point
    Sweep {
        /// Base output directory
        #[arg(long, default_value = "matrix_instances/generated")]
        out_dir: PathBuf,
        /// Instances per swept point
        #[arg(long, default_value_t = 1)]
        examples: usize,
        /// RNG seed for reproducible sweeps
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Square dimensions for the dense sweep, comma-separated
        #[arg(long, value_delimiter = ',')]
        dense_sizes: Option<Vec<usize>>,
        /// Square dimensions for the sparse sweep, comma-separated
        #[arg(long, value_delimiter = ',')]
        sparse_sizes: Option<Vec<usize>>,
        /// Density for the sparse size sweep
        #[arg(long)]
        sparse_density: Option<f64>,
        /// Densities for the fixed-size sweep, comma-separated
        #[arg(long, value_delimiter = ',')]
        mixed_densities: Option<Vec<f64>>,
        /// Fixed dimension for the density sweep
        #[arg(long)]
        mixed_size: Option<usize>,
        /// Also write the reference product C = A*B
        #[arg(long)]
        write_product: bool,
        /// Sample random coordinates from the full [0, n) range instead of
        /// the legacy [1, n) bound
        #[arg(long)]
        full_index_range: bool,
    },
    /// Random rectangular A, B pairs with their product C = A*B
    Cases {
        /// Filename stem for the generated files
        name: String,
        /// Number of cases
        #[arg(long, default_value_t = 10)]
        cases: usize,
        /// Maximum dimension per matrix
        #[arg(long, default_value_t = 100)]
        max_size: usize,
        /// Maximum density (0 = all zero, 1 = dense)
        #[arg(long, default_value_t = 0.2)]
        max_density: f64,
        #[arg(long, default_value = "matrix_instances/generated")]
        out_dir: PathBuf,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Deterministic tridiagonal (discrete Laplacian) instances
    Diagonals {
        /// Matrix dimensions, comma-separated
        #[arg(long, value_delimiter = ',', default_value = "100,1000")]
        sizes: Vec<usize>,
        #[arg(long, default_value = "matrix_instances/generated/toeplitz")]
        out_dir: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Cli::parse()) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), GenError> {
    match cli.command {
        Command::Sweep {
            out_dir,
            examples,
            seed,
            dense_sizes,
            sparse_sizes,
            sparse_density,
            mixed_densities,
            mixed_size,
            write_product,
            full_index_range,
        } => {
            let defaults = SweepConfig::default();
            let config = SweepConfig {
                output_dir: out_dir,
                examples,
                seed,
                index_range: if full_index_range {
                    IndexRange::Full
                } else {
                    IndexRange::Legacy
                },
                dense_sizes: dense_sizes.unwrap_or(defaults.dense_sizes),
                sparse_sizes: sparse_sizes.unwrap_or(defaults.sparse_sizes),
                sparse_density: sparse_density.unwrap_or(defaults.sparse_density),
                mixed_size: mixed_size.unwrap_or(defaults.mixed_size),
                mixed_densities: mixed_densities.unwrap_or(defaults.mixed_densities),
                diagonal_sizes: defaults.diagonal_sizes,
                write_product,
            };

            let summary = run_sweep(&config)?;
            info!("{} files written, {} points failed", summary.written, summary.failed);
        }
        Command::Cases {
            name,
            cases,
            max_size,
            max_density,
            out_dir,
            seed,
        } => {
            let config = CaseConfig {
                name,
                cases,
                max_size,
                max_density,
                output_dir: out_dir,
                seed,
            };
            info!(
                "generating {} cases up to {}x{} at density {} in {}",
                config.cases,
                config.max_size,
                config.max_size,
                config.max_density,
                config.output_dir.display()
            );

            let written = generate_cases(&config)?;
            info!("{} files written", written);
        }
        Command::Diagonals { sizes, out_dir } => {
            std::fs::create_dir_all(&out_dir)?;
            for n in sizes {
                let matrix = tridiagonal(n)?;
                let path = out_dir.join(format!("toeplitz_{}_A.mtx", n));
                mtx::write_sparse(&path, &matrix)?;
                info!("wrote {}", path.display());
            }
        }
    }

    Ok(())
}
