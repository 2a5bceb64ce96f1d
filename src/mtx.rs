//! Plain-text coordinate (MTX-like) serialization.
//!
//! The format is the MatrixMarket coordinate body without the banner: a
//! `rows cols entries` header line followed by one `row col value` line per
//! entry, 1-indexed, values printed with exactly 20 fractional digits. The
//! header's entry count always equals the number of data lines, so a file
//! holds `entries + 1` lines in total.
//!
//! Writers go through a scope-bound `BufWriter`, which closes the handle on
//! every exit path. There is no atomic replace: a write that fails midway
//! leaves a partial file the caller must discard and regenerate.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use ndarray::Array2;

use crate::error::GenError;
use crate::matrix::CooMatrix;

/// Writes every cell of a dense matrix in row-major order.
///
/// Header is `rows cols rows*cols`; zeros are written explicitly.
pub fn write_dense<P: AsRef<Path>>(path: P, matrix: &Array2<f64>) -> Result<(), GenError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    let (rows, cols) = matrix.dim();
    writeln!(writer, "{} {} {}", rows, cols, rows * cols)?;

    for ((row, col), value) in matrix.indexed_iter() {
        writeln!(writer, "{} {} {:.20}", row + 1, col + 1, value)?;
    }

    writer.flush()?;
    debug!("wrote dense {}x{} to {}", rows, cols, path.display());
    Ok(())
}

/// Writes the stored triples of a sparse matrix in insertion order.
///
/// Header is `rows cols nnz`. Triples are not sorted, and duplicate
/// coordinates are written as-is.
pub fn write_sparse<P, T>(path: P, matrix: &CooMatrix<T>) -> Result<(), GenError>
where
    P: AsRef<Path>,
    T: Copy + num_traits::Num + fmt::Display,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "{} {} {}", matrix.n_rows, matrix.n_cols, matrix.nnz())?;
    for (row, col, value) in matrix.iter() {
        writeln!(writer, "{} {} {:.20}", row + 1, col + 1, value)?;
    }

    writer.flush()?;
    debug!(
        "wrote sparse {}x{} ({} entries) to {}",
        matrix.n_rows,
        matrix.n_cols,
        matrix.nnz(),
        path.display()
    );
    Ok(())
}

/// Reads a coordinate file back into triples, converting to 0-indexing.
///
/// `%`-prefixed comment lines before the header are tolerated, so files with
/// a MatrixMarket banner load as well.
pub fn read_sparse<P: AsRef<Path>>(path: P) -> Result<CooMatrix<f64>, GenError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines().enumerate();

    let (header_line, header) = loop {
        match lines.next() {
            Some((index, line)) => {
                let line = line?;
                if !line.trim().is_empty() && !line.starts_with('%') {
                    break (index + 1, line);
                }
            }
            None => return Err(parse_error(path, 1, "missing header line")),
        }
    };

    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(parse_error(path, header_line, "header must be `rows cols entries`"));
    }
    let n_rows: usize = parse_field(path, header_line, fields[0], "rows")?;
    let n_cols: usize = parse_field(path, header_line, fields[1], "cols")?;
    let nnz: usize = parse_field(path, header_line, fields[2], "entry count")?;
    if n_rows < 1 || n_cols < 1 {
        return Err(parse_error(path, header_line, "dimensions must be at least 1"));
    }

    let mut matrix = CooMatrix::with_capacity(n_rows, n_cols, nnz);
    for (index, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(parse_error(path, index + 1, "entry must be `row col value`"));
        }
        let row: usize = parse_field(path, index + 1, fields[0], "row index")?;
        let col: usize = parse_field(path, index + 1, fields[1], "column index")?;
        let value: f64 = parse_field(path, index + 1, fields[2], "value")?;

        if row < 1 || row > n_rows || col < 1 || col > n_cols {
            return Err(parse_error(path, index + 1, "coordinate out of bounds"));
        }
        matrix.push(row - 1, col - 1, value);
    }

    if matrix.nnz() != nnz {
        return Err(parse_error(
            path,
            header_line,
            &format!("header declares {} entries but file holds {}", nnz, matrix.nnz()),
        ));
    }

    Ok(matrix)
}

/// Reads a coordinate file into a dense array, summing duplicate entries.
pub fn read_dense<P: AsRef<Path>>(path: P) -> Result<Array2<f64>, GenError> {
    Ok(read_sparse(path)?.to_dense())
}

fn parse_field<T: std::str::FromStr>(
    path: &Path,
    line: usize,
    field: &str,
    what: &str,
) -> Result<T, GenError> {
    field
        .parse()
        .map_err(|_| parse_error(path, line, &format!("invalid {}: {:?}", what, field)))
}

fn parse_error(path: &Path, line: usize, reason: &str) -> GenError {
    GenError::Parse {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_write_dense_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dense.mtx");

        let matrix = array![[0.5, 1.0], [0.25, 0.0]];
        write_dense(&path, &matrix).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "2 2 4\n\
             1 1 0.50000000000000000000\n\
             1 2 1.00000000000000000000\n\
             2 1 0.25000000000000000000\n\
             2 2 0.00000000000000000000\n"
        );
    }

    #[test]
    fn test_write_sparse_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.mtx");

        let mut matrix = CooMatrix::with_capacity(3, 3, 2);
        matrix.push(2, 0, 0.5);
        matrix.push(0, 1, 0.5);
        write_sparse(&path, &matrix).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "3 3 2");
        // Order of generation, not sorted.
        assert!(lines[1].starts_with("3 1 "));
        assert!(lines[2].starts_with("1 2 "));
    }

    #[test]
    fn test_sparse_round_trip_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.mtx");

        let mut factory = crate::generate::MatrixFactory::from_seed(42);
        let matrix = factory.sparse_with_count(10, 8, 12).unwrap();
        write_sparse(&path, &matrix).unwrap();

        let loaded = read_sparse(&path).unwrap();
        assert_eq!(loaded.n_rows, 10);
        assert_eq!(loaded.n_cols, 8);
        assert_eq!(loaded.row_idx, matrix.row_idx);
        assert_eq!(loaded.col_idx, matrix.col_idx);
        // 20 fractional digits exceed f64 precision, so values survive exactly.
        assert_eq!(loaded.values, matrix.values);
    }

    #[test]
    fn test_dense_round_trip_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dense_roundtrip.mtx");

        let mut factory = crate::generate::MatrixFactory::from_seed(7);
        let matrix = factory.dense(5, 3).unwrap();
        write_dense(&path, &matrix).unwrap();

        let loaded = read_dense(&path).unwrap();
        assert_eq!(loaded, matrix);
    }

    #[test]
    fn test_read_tolerates_banner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.mtx");
        std::fs::write(
            &path,
            "%%MatrixMarket matrix coordinate real general\n2 2 1\n1 1 3.0\n",
        )
        .unwrap();

        let matrix = read_sparse(&path).unwrap();
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.to_dense()[(0, 0)], 3.0);
    }

    #[test]
    fn test_read_rejects_bad_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.mtx");
        std::fs::write(&path, "2 2\n").unwrap();

        assert!(matches!(read_sparse(&path), Err(GenError::Parse { .. })));
    }

    #[test]
    fn test_read_rejects_count_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.mtx");
        std::fs::write(&path, "2 2 2\n1 1 1.0\n").unwrap();

        assert!(matches!(read_sparse(&path), Err(GenError::Parse { .. })));
    }

    #[test]
    fn test_write_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.mtx");

        let matrix = array![[1.0]];
        assert!(matches!(write_dense(&path, &matrix), Err(GenError::Io(_))));
    }
}
