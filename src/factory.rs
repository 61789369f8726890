//! Test matrix construction
//!
//! [`MatrixFactory`] builds the four matrix families from a [`MatrixSpec`].
//! The Laplacians are fully deterministic; the random kinds draw from a
//! seeded ChaCha8 generator, so a factory created with the same seed always
//! produces the same matrices in the same order.
//!
//! Random component: `round(density · n²)` distinct cells are sampled
//! uniformly without replacement, and each receives a value from
//! Uniform[`RANDOM_VALUE_LOW`, `RANDOM_VALUE_HIGH`).

use log::{debug, info, warn};
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::constants::*;
use crate::error::{MatgenError, Result};
use crate::matrix::{MatrixSpec, SparseMatrixCSR};

/// Builds test matrices from matrix specifications
pub struct MatrixFactory {
    seed: u64,
    rng: ChaCha8Rng,
}

impl MatrixFactory {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Factory with a freshly drawn seed; the seed is logged so a run can be
    /// reproduced with `--seed`.
    pub fn from_entropy() -> Self {
        let seed = rand::random::<u64>();
        info!("random seed: {}", seed);
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Builds the matrix described by `spec`
    pub fn build(&mut self, spec: &MatrixSpec) -> Result<SparseMatrixCSR<f64>> {
        info!("building {} matrix: {:?}", spec.kind().name(), spec);

        let matrix = match *spec {
            MatrixSpec::Laplace1d { n } => self.build_1d_laplace(n)?,
            MatrixSpec::Laplace2d { nx, ny } => self.build_2d_laplace(nx, ny)?,
            MatrixSpec::DiagonalDominant { n, dominance } => {
                self.build_diagonal_dominant(n, dominance)?
            }
            MatrixSpec::RandomSparse { n, density } => self.build_random_sparse(n, density)?,
        };

        debug!(
            "built {}×{} matrix with {} non-zeros",
            matrix.n_rows,
            matrix.n_cols,
            matrix.nnz()
        );
        Ok(matrix)
    }

    /// n×n tridiagonal matrix with 2 on the diagonal and -1 beside it
    pub fn build_1d_laplace(&self, n: usize) -> Result<SparseMatrixCSR<f64>> {
        ensure_positive("size", n)?;

        let (mut row_ptr, mut col_idx, mut values) = stencil_buffers(n, 3)?;
        row_ptr.push(0);

        for i in 0..n {
            if i > 0 {
                col_idx.push(i - 1);
                values.push(LAPLACE_NEIGHBOR);
            }

            col_idx.push(i);
            values.push(LAPLACE_1D_DIAGONAL);

            if i + 1 < n {
                col_idx.push(i + 1);
                values.push(LAPLACE_NEIGHBOR);
            }

            row_ptr.push(col_idx.len());
        }

        Ok(SparseMatrixCSR::new(n, n, row_ptr, col_idx, values))
    }

    /// Five-point Laplacian on an nx×ny grid, node (i, j) at row `i*ny + j`
    pub fn build_2d_laplace(&self, nx: usize, ny: usize) -> Result<SparseMatrixCSR<f64>> {
        ensure_positive("nx", nx)?;
        ensure_positive("ny", ny)?;
        let n = nx.checked_mul(ny).ok_or_else(|| {
            MatgenError::InvalidParameter(format!("grid {}x{} is too large", nx, ny))
        })?;

        let (mut row_ptr, mut col_idx, mut values) = stencil_buffers(n, 5)?;
        row_ptr.push(0);

        // Neighbours are pushed in increasing column order: (i-1, j), (i, j-1),
        // diagonal, (i, j+1), (i+1, j).
        for i in 0..nx {
            for j in 0..ny {
                let index = i * ny + j;

                if i > 0 {
                    col_idx.push(index - ny);
                    values.push(LAPLACE_NEIGHBOR);
                }
                if j > 0 {
                    col_idx.push(index - 1);
                    values.push(LAPLACE_NEIGHBOR);
                }

                col_idx.push(index);
                values.push(LAPLACE_2D_DIAGONAL);

                if j + 1 < ny {
                    col_idx.push(index + 1);
                    values.push(LAPLACE_NEIGHBOR);
                }
                if i + 1 < nx {
                    col_idx.push(index + ny);
                    values.push(LAPLACE_NEIGHBOR);
                }

                row_ptr.push(col_idx.len());
            }
        }

        Ok(SparseMatrixCSR::new(n, n, row_ptr, col_idx, values))
    }

    /// Random sparse matrix (density 0.1) plus `dominance` times the identity
    pub fn build_diagonal_dominant(
        &mut self,
        n: usize,
        dominance: f64,
    ) -> Result<SparseMatrixCSR<f64>> {
        if !dominance.is_finite() {
            return Err(MatgenError::InvalidParameter(format!(
                "dominance must be finite, got {}",
                dominance
            )));
        }
        if dominance <= 0.0 {
            warn!("dominance {} is not positive; the matrix is unlikely to be diagonally dominant", dominance);
        }

        let random = self.random_sparse(n, DIAGONAL_DOMINANT_DENSITY)?;
        Ok(random.add_scaled_identity(dominance))
    }

    /// Random sparse matrix at `density` plus the identity
    pub fn build_random_sparse(&mut self, n: usize, density: f64) -> Result<SparseMatrixCSR<f64>> {
        let random = self.random_sparse(n, density)?;
        Ok(random.add_scaled_identity(1.0))
    }

    /// Uniformly placed random entries, without the diagonal shift
    fn random_sparse(&mut self, n: usize, density: f64) -> Result<SparseMatrixCSR<f64>> {
        ensure_positive("size", n)?;
        if !(density > 0.0 && density <= 1.0) {
            return Err(MatgenError::InvalidParameter(format!(
                "density must be in (0, 1], got {}",
                density
            )));
        }

        let cells = n.checked_mul(n).ok_or_else(|| {
            MatgenError::InvalidParameter(format!("size {} is too large", n))
        })?;
        let target_nnz = ((cells as f64 * density).round() as usize).min(cells);
        debug!("sampling {} of {} cells (seed {})", target_nnz, cells, self.seed);

        // Room for the random entries plus the diagonal added afterwards
        let capacity = target_nnz.checked_add(n).ok_or_else(|| {
            MatgenError::InvalidParameter(format!("size {} is too large", n))
        })?;
        let mut triplets = Vec::new();
        triplets.try_reserve_exact(capacity).map_err(|e| {
            MatgenError::InvalidParameter(format!("size {} is too large: {}", n, e))
        })?;

        let positions = rand::seq::index::sample(&mut self.rng, cells, target_nnz);
        let val_dist = Uniform::from(RANDOM_VALUE_LOW..RANDOM_VALUE_HIGH);

        for cell in positions.iter() {
            triplets.push((cell / n, cell % n, val_dist.sample(&mut self.rng)));
        }

        Ok(SparseMatrixCSR::from_triplets(n, n, triplets))
    }
}

fn ensure_positive(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(MatgenError::InvalidParameter(format!(
            "{} must be at least 1",
            name
        )));
    }
    Ok(())
}

/// Empty CSR arrays with room for `n` rows of at most `per_row` entries.
///
/// Sizes that overflow or cannot be allocated are reported as
/// `InvalidParameter` instead of panicking.
fn stencil_buffers(
    n: usize,
    per_row: usize,
) -> Result<(Vec<usize>, Vec<usize>, Vec<f64>)> {
    let too_large = |detail: String| {
        MatgenError::InvalidParameter(format!("{} rows are too many: {}", n, detail))
    };

    let ptr_len = n
        .checked_add(1)
        .ok_or_else(|| too_large("row pointer length overflows".to_string()))?;
    let nnz = n
        .checked_mul(per_row)
        .ok_or_else(|| too_large("entry count overflows".to_string()))?;

    let mut row_ptr = Vec::new();
    let mut col_idx = Vec::new();
    let mut values = Vec::new();
    row_ptr
        .try_reserve_exact(ptr_len)
        .map_err(|e| too_large(e.to_string()))?;
    col_idx
        .try_reserve_exact(nnz)
        .map_err(|e| too_large(e.to_string()))?;
    values
        .try_reserve_exact(nnz)
        .map_err(|e| too_large(e.to_string()))?;

    Ok((row_ptr, col_idx, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laplace_1d_single() {
        let factory = MatrixFactory::new(0);
        let m = factory.build_1d_laplace(1).unwrap();
        assert_eq!(m.shape(), (1, 1));
        assert_eq!(m.values, vec![2.0]);
    }

    #[test]
    fn test_laplace_1d_structure() {
        let factory = MatrixFactory::new(0);
        let m = factory.build_1d_laplace(4).unwrap();
        assert_eq!(m.row_ptr, vec![0, 2, 5, 8, 10]);
        assert_eq!(m.col_idx, vec![0, 1, 0, 1, 2, 1, 2, 3, 2, 3]);
        assert_eq!(m.row_sum(0), 1.0);
        assert_eq!(m.row_sum(1), 0.0);
        assert_eq!(m.row_sum(3), 1.0);
    }

    #[test]
    fn test_laplace_2d_row_order() {
        let factory = MatrixFactory::new(0);
        let m = factory.build_2d_laplace(3, 3).unwrap();
        // Centre node touches all four neighbours
        let centre: Vec<_> = m.row_iter(4).map(|(j, &v)| (j, v)).collect();
        assert_eq!(
            centre,
            vec![(1, -1.0), (3, -1.0), (4, 4.0), (5, -1.0), (7, -1.0)]
        );
        // Corner node has two
        assert_eq!(m.row_iter(0).count(), 3);
    }

    #[test]
    fn test_laplace_2d_degenerate_grid() {
        let factory = MatrixFactory::new(0);
        let m = factory.build_2d_laplace(1, 4).unwrap();
        assert_eq!(m.shape(), (4, 4));
        assert_eq!(m.nnz(), 4 + 2 * 3);
    }

    #[test]
    fn test_invalid_parameters() {
        let mut factory = MatrixFactory::new(0);
        assert!(matches!(
            factory.build_1d_laplace(0),
            Err(MatgenError::InvalidParameter(_))
        ));
        assert!(factory.build_2d_laplace(0, 3).is_err());
        assert!(factory.build_2d_laplace(3, 0).is_err());
        assert!(factory.build_random_sparse(10, 0.0).is_err());
        assert!(factory.build_random_sparse(10, 1.5).is_err());
        assert!(factory.build_random_sparse(10, f64::NAN).is_err());
        assert!(factory.build_random_sparse(0, 0.5).is_err());
        assert!(factory.build_diagonal_dominant(10, f64::INFINITY).is_err());
    }

    #[test]
    fn test_oversized_laplacians_are_rejected() {
        let factory = MatrixFactory::new(0);
        assert!(matches!(
            factory.build_1d_laplace(usize::MAX),
            Err(MatgenError::InvalidParameter(_))
        ));
        // Entry count fits in usize, byte size does not
        assert!(matches!(
            factory.build_1d_laplace(usize::MAX / 8),
            Err(MatgenError::InvalidParameter(_))
        ));

        let side = (1usize << 32) - 1;
        assert!(matches!(
            factory.build_2d_laplace(side, side),
            Err(MatgenError::InvalidParameter(_))
        ));
        assert!(matches!(
            factory.build_2d_laplace(usize::MAX, 2),
            Err(MatgenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_oversized_random_is_rejected() {
        let mut factory = MatrixFactory::new(0);
        assert!(matches!(
            factory.build_random_sparse(usize::MAX, 0.5),
            Err(MatgenError::InvalidParameter(_))
        ));
        // n² fits, the triplet buffer does not
        assert!(matches!(
            factory.build_random_sparse((1usize << 32) - 1, 1.0),
            Err(MatgenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_random_sparse_is_reproducible() {
        let a = MatrixFactory::new(42).build_random_sparse(30, 0.2).unwrap();
        let b = MatrixFactory::new(42).build_random_sparse(30, 0.2).unwrap();
        let c = MatrixFactory::new(43).build_random_sparse(30, 0.2).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_sparse_has_unit_shifted_diagonal() {
        let m = MatrixFactory::new(7).build_random_sparse(20, 0.1).unwrap();
        for i in 0..20 {
            let d = m.get(i, i).unwrap();
            assert!((1.0..2.0).contains(&d), "diagonal {} out of range", d);
        }
        for (i, j, v) in m.triplet_iter() {
            if i != j {
                assert!((RANDOM_VALUE_LOW..RANDOM_VALUE_HIGH).contains(&v));
            }
        }
    }

    #[test]
    fn test_random_sparse_nnz_bounds() {
        // 40 random cells; diagonal hits merge with the identity
        let m = MatrixFactory::new(3).build_random_sparse(20, 0.1).unwrap();
        assert!(m.nnz() >= 40);
        assert!(m.nnz() <= 60);
    }

    #[test]
    fn test_full_density() {
        let m = MatrixFactory::new(1).build_random_sparse(5, 1.0).unwrap();
        assert_eq!(m.nnz(), 25);
    }

    #[test]
    fn test_build_dispatch() {
        let mut factory = MatrixFactory::new(11);
        let m = factory
            .build(&MatrixSpec::DiagonalDominant { n: 12, dominance: 12.0 })
            .unwrap();
        assert_eq!(m.shape(), (12, 12));
        assert!(m.is_diagonally_dominant());
        assert_eq!(factory.seed(), 11);
    }
}
