//! Description of the matrix to generate
//!
//! A [`MatrixSpec`] is the kind plus every parameter needed to build it. It
//! also decides the output file name, which downstream solver scripts rely on.

use clap::ValueEnum;

use crate::constants::MATRIX_MARKET_EXTENSION;
use crate::utils::format_float_repr;

/// The family of test matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "lower")]
pub enum MatrixKind {
    /// Tridiagonal 1D Laplacian
    Laplace1d,
    /// Five-point 2D Laplacian
    Laplace2d,
    /// Random sparse matrix shifted by a multiple of the identity
    Diagonal,
    /// Random sparse matrix plus the identity
    Random,
}

impl MatrixKind {
    pub fn name(&self) -> &'static str {
        match self {
            MatrixKind::Laplace1d => "laplace1d",
            MatrixKind::Laplace2d => "laplace2d",
            MatrixKind::Diagonal => "diagonal",
            MatrixKind::Random => "random",
        }
    }
}

/// Kind and shape parameters that fully determine a matrix
/// (up to the random draw for the random kinds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixSpec {
    Laplace1d { n: usize },
    Laplace2d { nx: usize, ny: usize },
    DiagonalDominant { n: usize, dominance: f64 },
    RandomSparse { n: usize, density: f64 },
}

impl MatrixSpec {
    pub fn kind(&self) -> MatrixKind {
        match self {
            MatrixSpec::Laplace1d { .. } => MatrixKind::Laplace1d,
            MatrixSpec::Laplace2d { .. } => MatrixKind::Laplace2d,
            MatrixSpec::DiagonalDominant { .. } => MatrixKind::Diagonal,
            MatrixSpec::RandomSparse { .. } => MatrixKind::Random,
        }
    }

    /// Whether building this matrix consumes random numbers
    pub fn is_random(&self) -> bool {
        matches!(
            self,
            MatrixSpec::DiagonalDominant { .. } | MatrixSpec::RandomSparse { .. }
        )
    }

    /// Output file name, e.g. `laplace2d_10x10.mtx` or `random_100_density0.05.mtx`
    pub fn file_name(&self) -> String {
        let stem = match *self {
            MatrixSpec::Laplace1d { n } => format!("laplace1d_{}", n),
            MatrixSpec::Laplace2d { nx, ny } => format!("laplace2d_{}x{}", nx, ny),
            MatrixSpec::DiagonalDominant { n, .. } => format!("diagonal_{}", n),
            MatrixSpec::RandomSparse { n, density } => {
                format!("random_{}_density{}", n, format_float_repr(density))
            }
        };
        format!("{}.{}", stem, MATRIX_MARKET_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(MatrixSpec::Laplace1d { n: 100 }.file_name(), "laplace1d_100.mtx");
        assert_eq!(
            MatrixSpec::Laplace2d { nx: 10, ny: 20 }.file_name(),
            "laplace2d_10x20.mtx"
        );
        assert_eq!(
            MatrixSpec::DiagonalDominant { n: 50, dominance: 3.0 }.file_name(),
            "diagonal_50.mtx"
        );
        assert_eq!(
            MatrixSpec::RandomSparse { n: 100, density: 0.05 }.file_name(),
            "random_100_density0.05.mtx"
        );
        assert_eq!(
            MatrixSpec::RandomSparse { n: 10, density: 1.0 }.file_name(),
            "random_10_density1.0.mtx"
        );
    }

    #[test]
    fn test_kinds() {
        let spec = MatrixSpec::RandomSparse { n: 3, density: 0.5 };
        assert_eq!(spec.kind(), MatrixKind::Random);
        assert!(spec.is_random());
        assert!(!MatrixSpec::Laplace2d { nx: 1, ny: 1 }.is_random());
        assert_eq!(MatrixKind::Laplace2d.name(), "laplace2d");
    }

    #[test]
    fn test_kind_parses_cli_names() {
        assert_eq!(MatrixKind::from_str("laplace1d", false), Ok(MatrixKind::Laplace1d));
        assert_eq!(MatrixKind::from_str("diagonal", false), Ok(MatrixKind::Diagonal));
        assert!(MatrixKind::from_str("tridiag", false).is_err());
    }
}
