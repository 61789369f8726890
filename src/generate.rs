//! One generation run: build, save, summarize

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::factory::MatrixFactory;
use crate::matrix::{MatrixSpec, SparseMatrixCSR};
use crate::report::MatrixInfo;
use crate::writer::MatrixWriter;

/// Result of a successful run
#[derive(Debug)]
pub struct Generated {
    pub path: PathBuf,
    pub matrix: SparseMatrixCSR<f64>,
    pub info: MatrixInfo,
    /// Set when the requested format was substituted with Matrix Market text
    pub notice: Option<String>,
}

/// Builds the matrix for `spec`, writes it into `output_dir` under its
/// conventional file name and computes its summary.
///
/// The output directory is created if needed. A construction error aborts
/// the run before anything is written.
pub fn generate(
    factory: &mut MatrixFactory,
    spec: &MatrixSpec,
    writer: &MatrixWriter,
    output_dir: &Path,
) -> Result<Generated> {
    let matrix = factory.build(spec)?;

    fs::create_dir_all(output_dir)?;
    let target = output_dir.join(spec.file_name());
    let notice = writer.fallback_notice(&target);
    let path = writer.write(&target, &matrix)?;

    let info = MatrixInfo::from_matrix(&matrix);
    info!(
        "{}: {} non-zeros, density {:.4}",
        path.display(),
        info.nnz,
        info.density
    );

    Ok(Generated {
        path,
        matrix,
        info,
        notice,
    })
}
