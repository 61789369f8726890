//! Utilities for converting between our matrix format and sprs

use crate::matrix::SparseMatrixCSR;
use num_traits::Num;
use sprs::CsMat;

/// Converts our CSR matrix format to sprs CsMat format
pub fn to_sprs_csr<T>(matrix: &SparseMatrixCSR<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    CsMat::new(
        (matrix.n_rows, matrix.n_cols),
        matrix.row_ptr.clone(),
        matrix.col_idx.clone(),
        matrix.values.clone(),
    )
}

/// Converts a sprs CsMat (either storage) to our SparseMatrixCSR format
pub fn from_sprs_csr<T>(matrix: CsMat<T>) -> SparseMatrixCSR<T>
where
    T: Copy + Num + Default,
{
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (n_rows, n_cols) = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSR::new(n_rows, n_cols, indptr, indices, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_roundtrip() {
        let original = SparseMatrixCSR::from_triplets(
            3,
            3,
            vec![(0, 0, 2.0f64), (0, 1, -1.0), (1, 0, -1.0), (1, 1, 2.0), (2, 2, 2.0)],
        );

        let sprs_mat = to_sprs_csr(&original);
        assert_eq!(sprs_mat.nnz(), 5);
        assert_eq!(sprs_mat.get(1, 0), Some(&-1.0));
        assert_eq!(sprs_mat.get(2, 0), None);

        assert_eq!(from_sprs_csr(sprs_mat), original);
    }

    #[test]
    fn test_from_sprs_csc_is_converted() {
        let original = SparseMatrixCSR::from_triplets(2, 3, vec![(0, 2, 1.5f64), (1, 0, -3.0)]);
        let csc = to_sprs_csr(&original).to_csc();
        assert!(csc.is_csc());
        assert_eq!(from_sprs_csr(csc), original);
    }
}
