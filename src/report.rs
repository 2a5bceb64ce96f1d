//! Timing-CSV aggregation and comparison charts.
//!
//! The benchmark runner emits one CSV row per multiplied pair with columns
//! `Matrix1, Matrix2` and one `<method> (µs)` column per timed method. This
//! module derives the matrix size from the `Matrix1` filename, averages each
//! method per size, and renders one line chart with a log-scale time axis.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::Reader;
use log::info;
use plotters::prelude::*;

use crate::error::ReportError;

/// Column holding the left-hand matrix filename.
pub const MATRIX_COLUMN: &str = "Matrix1";

/// Suffix marking a timing column.
const METHOD_SUFFIX: &str = "(µs)";

/// Which timing a CSV holds; selects the chart title.
///
/// An explicit parameter: the kind is stated by the caller, never sniffed
/// from the filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Total,
    RawMultiplication,
    Overhead,
}

impl PlotKind {
    pub fn title(self) -> &'static str {
        match self {
            PlotKind::Total => "Total Time",
            PlotKind::RawMultiplication => "Raw Multiplication Time",
            PlotKind::Overhead => "Overhead Time",
        }
    }
}

/// Mean timings per method, grouped by matrix size.
#[derive(Debug, Clone)]
pub struct TimingSummary {
    /// Timed method column headers, in CSV order.
    pub methods: Vec<String>,
    /// Size → mean µs per method, indexed like `methods`. Sorted by size.
    pub by_size: BTreeMap<u64, Vec<f64>>,
}

/// Pulls the numeric size out of a generated matrix filename.
///
/// The size sits at underscore position 1 (`dense_500_A0.mtx` → 500),
/// regardless of any path prefix or extension around it.
pub fn extract_size(matrix_name: &str) -> Result<u64, ReportError> {
    matrix_name
        .split('_')
        .nth(1)
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| ReportError::BadSizeToken(matrix_name.to_string()))
}

/// Groups the rows of a timing CSV by matrix size and averages each method.
pub fn aggregate<R: Read>(mut reader: Reader<R>) -> Result<TimingSummary, ReportError> {
    let headers = reader.headers()?.clone();
    let matrix_col = headers
        .iter()
        .position(|header| header == MATRIX_COLUMN)
        .ok_or_else(|| ReportError::MissingColumn(MATRIX_COLUMN.to_string()))?;

    let method_cols: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(_, header)| header.trim().ends_with(METHOD_SUFFIX))
        .map(|(index, header)| (index, header.trim().to_string()))
        .collect();
    if method_cols.is_empty() {
        return Err(ReportError::MissingColumn(format!("*{}", METHOD_SUFFIX)));
    }

    let mut groups: BTreeMap<u64, (usize, Vec<f64>)> = BTreeMap::new();
    for record in reader.records() {
        let record = record?;
        let name = record
            .get(matrix_col)
            .ok_or_else(|| ReportError::MissingColumn(MATRIX_COLUMN.to_string()))?;
        let size = extract_size(name)?;

        let (count, sums) = groups
            .entry(size)
            .or_insert_with(|| (0, vec![0.0; method_cols.len()]));
        *count += 1;

        for (slot, (index, header)) in method_cols.iter().enumerate() {
            let raw = record
                .get(*index)
                .ok_or_else(|| ReportError::MissingColumn(header.clone()))?;
            let value: f64 = raw.trim().parse().map_err(|_| ReportError::BadValue {
                column: header.clone(),
                value: raw.to_string(),
            })?;
            sums[slot] += value;
        }
    }

    let by_size = groups
        .into_iter()
        .map(|(size, (count, sums))| {
            let means = sums.into_iter().map(|sum| sum / count as f64).collect();
            (size, means)
        })
        .collect();

    Ok(TimingSummary {
        methods: method_cols.into_iter().map(|(_, header)| header).collect(),
        by_size,
    })
}

/// Renders one line chart: matrix size on x, mean time on log-scale y,
/// one series per method. Creates the output directory if absent.
pub fn render_chart(
    summary: &TimingSummary,
    kind: PlotKind,
    out_path: &Path,
) -> Result<(), ReportError> {
    if summary.by_size.is_empty() {
        return Err(ReportError::Plot("no timing rows to plot".to_string()));
    }
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let x_min = *summary.by_size.keys().next().unwrap_or(&0) as f64;
    let x_max = *summary.by_size.keys().next_back().unwrap_or(&1) as f64;
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for means in summary.by_size.values() {
        for &mean in means {
            if mean > 0.0 {
                y_min = y_min.min(mean);
            }
            y_max = y_max.max(mean);
        }
    }
    if !y_min.is_finite() || !(y_max > 0.0) {
        return Err(ReportError::Plot("no positive timings to plot".to_string()));
    }

    let root = SVGBackend::new(out_path, (1000, 1000)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Performance Comparison: {}", kind.title()),
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max + 1.0, (y_min..y_max * 1.1).log_scale())
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Matrix Size")
        .y_desc("Time (µs)")
        .draw()
        .map_err(plot_err)?;

    for (slot, method) in summary.methods.iter().enumerate() {
        let color = Palette99::pick(slot).to_rgba();
        chart
            .draw_series(LineSeries::new(
                summary
                    .by_size
                    .iter()
                    .map(|(size, means)| (*size as f64, means[slot])),
                color,
            ))
            .map_err(plot_err)?
            .label(method.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;
    root.present().map_err(plot_err)?;

    info!("wrote chart {}", out_path.display());
    Ok(())
}

fn plot_err<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Plot(err.to_string())
}
