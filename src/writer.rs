//! Persisting generated matrices
//!
//! Matrix Market text is the only format actually produced. Requesting the
//! PETSc binary format is accepted but degrades to Matrix Market text. The
//! writer hands back a notice describing the substitution; the binary prints
//! it so the degraded output is never silent.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::{debug, info};

use crate::error::Result;
use crate::matrix::SparseMatrixCSR;
use crate::matrix_market::MatrixMarketIO;

/// Requested on-disk format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Matrix Market coordinate text
    #[default]
    #[value(name = "mm")]
    MatrixMarket,
    /// PETSc binary. Not implemented: falls back to Matrix Market text.
    ///
    /// The fallback file is written to the same `<name>.mtx` path as a
    /// regular Matrix Market request. This deliberately differs from the
    /// older Python generator, which wrote `<name>.mtx.mtx` in this case;
    /// fixtures produced by either format share one path here.
    #[value(name = "petsc")]
    PetscBinary,
}

/// Writes matrices in the requested format
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixWriter {
    format: OutputFormat,
}

impl MatrixWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Whether a write in this format is a degraded substitute
    pub fn is_fallback(&self) -> bool {
        self.format == OutputFormat::PetscBinary
    }

    /// Notice announcing that `path` will hold Matrix Market text instead of
    /// the requested format, or `None` when no substitution happens.
    pub fn fallback_notice(&self, path: &Path) -> Option<String> {
        match self.format {
            OutputFormat::MatrixMarket => None,
            OutputFormat::PetscBinary => Some(format!(
                "PETSc binary format not implemented yet, saving as Matrix Market: {}",
                path.display()
            )),
        }
    }

    /// Writes `matrix` to `path`, creating or truncating the file.
    ///
    /// Returns the path that was actually written. Callers report
    /// [`MatrixWriter::fallback_notice`] to the user.
    pub fn write(&self, path: &Path, matrix: &SparseMatrixCSR<f64>) -> Result<PathBuf> {
        if self.is_fallback() {
            debug!("{:?} requested, writing Matrix Market instead", self.format);
        }
        MatrixMarketIO::write_matrix(path, matrix)?;
        info!("matrix saved as Matrix Market: {}", path.display());
        Ok(path.to_path_buf())
    }
}
