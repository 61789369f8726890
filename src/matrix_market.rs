//! Matrix Market coordinate format reader/writer
//!
//! Only the coordinate layout is handled. The writer always emits
//! `real general`; the reader also accepts `integer` and `pattern` fields and
//! `symmetric` storage so that externally produced fixtures can be loaded.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::constants::MATRIX_MARKET_BANNER;
use crate::error::{MatgenError, Result};
use crate::matrix::SparseMatrixCSR;
use crate::utils::format_float_repr;

/// Matrix Market format reader/writer
pub struct MatrixMarketIO;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Real,
    Integer,
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Symmetry {
    General,
    Symmetric,
}

impl MatrixMarketIO {
    /// Write a matrix in Matrix Market format
    ///
    /// Entries are written row by row with increasing column, 1-based. Values
    /// use the shortest representation that parses back to the same `f64`
    /// (`2.0`, `-1.0`, `0.8515`, `1e-300`), so writing an unchanged matrix
    /// always produces identical bytes.
    pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrixCSR<f64>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut out = BufWriter::new(file);

        Self::write_to(&mut out, matrix)?;
        out.flush()?;

        debug!(
            "wrote {} entries to {}",
            matrix.nnz(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Serializes a matrix to any writer
    pub fn write_to<W: Write>(out: &mut W, matrix: &SparseMatrixCSR<f64>) -> Result<()> {
        writeln!(out, "{}", MATRIX_MARKET_BANNER)?;
        writeln!(out, "{} {} {}", matrix.n_rows, matrix.n_cols, matrix.nnz())?;

        for (i, j, v) in matrix.triplet_iter() {
            writeln!(out, "{} {} {}", i + 1, j + 1, format_float_repr(v))?;
        }

        Ok(())
    }

    /// Read a matrix in Matrix Market format
    pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrixCSR<f64>> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Parses Matrix Market text from any buffered reader
    pub fn read_from<R: BufRead>(reader: R) -> Result<SparseMatrixCSR<f64>> {
        let mut lines = reader.lines().enumerate().map(|(k, l)| (k + 1, l));

        let (field, symmetry) = match lines.next() {
            Some((line_no, line)) => Self::parse_banner(line_no, &line?)?,
            None => return Err(MatgenError::parse(1, "empty file")),
        };

        // Skip comments and read the size line: rows cols nnz
        let mut size_line = None;
        for (line_no, line) in lines.by_ref() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('%') {
                continue;
            }
            size_line = Some((line_no, trimmed.to_string()));
            break;
        }
        let (size_line_no, size_line) =
            size_line.ok_or_else(|| MatgenError::parse(1, "missing size line"))?;

        let sizes: Vec<usize> = size_line
            .split_whitespace()
            .map(|s| s.parse::<usize>())
            .collect::<std::result::Result<Vec<usize>, _>>()
            .map_err(|e| MatgenError::parse(size_line_no, format!("invalid size line: {}", e)))?;
        if sizes.len() != 3 {
            return Err(MatgenError::parse(
                size_line_no,
                format!("expected `rows cols nnz`, got {} fields", sizes.len()),
            ));
        }
        let (n_rows, n_cols, nnz) = (sizes[0], sizes[1], sizes[2]);

        let mut triplets: Vec<(usize, usize, f64)> = Vec::with_capacity(nnz);
        let mut entries = 0usize;

        for (line_no, line) in lines {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('%') {
                continue;
            }

            let (row, col, val) = Self::parse_entry(line_no, trimmed, field, n_rows, n_cols)?;
            triplets.push((row, col, val));
            if symmetry == Symmetry::Symmetric && row != col {
                triplets.push((col, row, val));
            }
            entries += 1;
        }

        if entries != nnz {
            return Err(MatgenError::parse(
                size_line_no,
                format!("header declares {} entries, found {}", nnz, entries),
            ));
        }

        Ok(SparseMatrixCSR::from_triplets(n_rows, n_cols, triplets))
    }

    fn parse_banner(line_no: usize, line: &str) -> Result<(Field, Symmetry)> {
        let tokens: Vec<String> = line.split_whitespace().map(|t| t.to_lowercase()).collect();
        if tokens.len() != 5 || tokens[0] != "%%matrixmarket" || tokens[1] != "matrix" {
            return Err(MatgenError::parse(line_no, "missing %%MatrixMarket banner"));
        }
        if tokens[2] != "coordinate" {
            return Err(MatgenError::parse(
                line_no,
                format!("unsupported layout `{}`", tokens[2]),
            ));
        }

        let field = match tokens[3].as_str() {
            "real" => Field::Real,
            "integer" => Field::Integer,
            "pattern" => Field::Pattern,
            other => {
                return Err(MatgenError::parse(
                    line_no,
                    format!("unsupported field `{}`", other),
                ))
            }
        };
        let symmetry = match tokens[4].as_str() {
            "general" => Symmetry::General,
            "symmetric" => Symmetry::Symmetric,
            other => {
                return Err(MatgenError::parse(
                    line_no,
                    format!("unsupported symmetry `{}`", other),
                ))
            }
        };

        Ok((field, symmetry))
    }

    fn parse_entry(
        line_no: usize,
        line: &str,
        field: Field,
        n_rows: usize,
        n_cols: usize,
    ) -> Result<(usize, usize, f64)> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let expected = if field == Field::Pattern { 2 } else { 3 };
        if parts.len() != expected {
            return Err(MatgenError::parse(
                line_no,
                format!("expected {} fields, got {}", expected, parts.len()),
            ));
        }

        let index = |s: &str, bound: usize, what: &str| -> Result<usize> {
            let idx: usize = s
                .parse()
                .map_err(|_| MatgenError::parse(line_no, format!("invalid {} index `{}`", what, s)))?;
            if idx == 0 || idx > bound {
                return Err(MatgenError::parse(
                    line_no,
                    format!("{} index {} out of range 1..={}", what, idx, bound),
                ));
            }
            Ok(idx - 1)
        };

        let row = index(parts[0], n_rows, "row")?;
        let col = index(parts[1], n_cols, "column")?;
        let val = match field {
            Field::Pattern => 1.0,
            _ => parts[2]
                .parse::<f64>()
                .map_err(|_| MatgenError::parse(line_no, format!("invalid value `{}`", parts[2])))?,
        };

        Ok((row, col, val))
    }
}
