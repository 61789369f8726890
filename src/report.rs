//! Summary statistics printed after a matrix is generated

use std::fmt;

use log::debug;
use nalgebra::DMatrix;

use crate::constants::CONDITION_NUMBER_MAX_ROWS;
use crate::error::{MatgenError, Result};
use crate::matrix::SparseMatrixCSR;
use crate::utils::format_scientific;

/// Shape, fill and (for small matrices) conditioning of a matrix
#[derive(Debug, Clone)]
pub struct MatrixInfo {
    pub n_rows: usize,
    pub n_cols: usize,
    pub nnz: usize,
    pub density: f64,
    /// `None` when the matrix is too large to attempt an estimate,
    /// `Some(Err(..))` when the estimate failed.
    pub condition_number: Option<std::result::Result<f64, String>>,
}

impl MatrixInfo {
    pub fn from_matrix(matrix: &SparseMatrixCSR<f64>) -> Self {
        let condition_number = if matrix.n_rows <= CONDITION_NUMBER_MAX_ROWS {
            Some(condition_number(matrix).map_err(|e| {
                debug!("condition number estimate failed: {}", e);
                e.to_string()
            }))
        } else {
            None
        };

        Self {
            n_rows: matrix.n_rows,
            n_cols: matrix.n_cols,
            nnz: matrix.nnz(),
            density: matrix.density(),
            condition_number,
        }
    }
}

impl fmt::Display for MatrixInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix information:")?;
        writeln!(f, "  Size: {} x {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  Non-zero elements: {}", self.nnz)?;
        write!(f, "  Density: {:.4}", self.density)?;
        match &self.condition_number {
            Some(Ok(cond)) => write!(f, "\n  Condition number: {}", format_scientific(*cond, 2)),
            Some(Err(_)) => write!(f, "\n  Condition number: Too large to compute"),
            None => Ok(()),
        }
    }
}

/// 2-norm condition number σ_max / σ_min of the dense expansion.
///
/// Fails with [`MatgenError::NumericEstimate`] for empty or singular
/// matrices, non-finite results and SVD non-convergence.
pub fn condition_number(matrix: &SparseMatrixCSR<f64>) -> Result<f64> {
    let (n_rows, n_cols) = matrix.shape();
    if n_rows == 0 || n_cols == 0 {
        return Err(MatgenError::NumericEstimate("empty matrix".to_string()));
    }

    let mut dense = DMatrix::<f64>::zeros(n_rows, n_cols);
    for (i, j, v) in matrix.triplet_iter() {
        dense[(i, j)] = v;
    }

    let svd = dense
        .try_svd(false, false, f64::EPSILON, 0)
        .ok_or_else(|| MatgenError::NumericEstimate("SVD did not converge".to_string()))?;

    let sigma = &svd.singular_values;
    let max = sigma.max();
    let min = sigma.min();

    if !max.is_finite() || !min.is_finite() {
        return Err(MatgenError::NumericEstimate(
            "non-finite singular values".to_string(),
        ));
    }
    // Numerically rank deficient
    if min <= max * f64::EPSILON * n_rows.max(n_cols) as f64 {
        return Err(MatgenError::NumericEstimate("matrix is singular".to_string()));
    }

    let cond = max / min;
    if !cond.is_finite() {
        return Err(MatgenError::NumericEstimate(format!(
            "condition number overflows ({} / {})",
            max, min
        )));
    }
    Ok(cond)
}
