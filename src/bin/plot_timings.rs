//! Benchmark timing aggregation CLI.
//!
//! Reads a timing CSV from the benchmark runner, averages each method per
//! matrix size, and writes one comparison chart.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use log::error;
use matgen::{aggregate, render_chart, PlotKind};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Total,
    RawMultiplication,
    Overhead,
}

impl From<KindArg> for PlotKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Total => PlotKind::Total,
            KindArg::RawMultiplication => PlotKind::RawMultiplication,
            KindArg::Overhead => PlotKind::Overhead,
        }
    }
}

#[derive(Parser)]
#[command(name = "plot_timings", version, about = "Render comparison charts from benchmark timing CSVs")]
struct Cli {
    /// Timing CSV produced by the benchmark runner
    csv: PathBuf,
    /// Which timing the CSV holds; sets the chart title
    #[arg(long, value_enum)]
    kind: KindArg,
    /// Output directory for charts; defaults to `plots/` beside the CSV
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Cli::parse()) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let reader = csv::Reader::from_path(&cli.csv)?;
    let summary = aggregate(reader)?;

    let out_dir = cli.out_dir.unwrap_or_else(|| {
        cli.csv
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("plots")
    });
    let stem = cli
        .csv
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "timings".to_string());

    render_chart(&summary, cli.kind.into(), &out_dir.join(format!("{}.svg", stem)))?;
    Ok(())
}
