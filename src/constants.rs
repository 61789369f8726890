//! Centralized constants for the matgen test-matrix generator
//!
//! Defaults for the command line, parameters of the random generators and
//! thresholds of the matrix report all live here rather than being
//! scattered through the code.

// ============================================================================
// COMMAND LINE DEFAULTS
// ============================================================================

/// Default matrix size for the 1D Laplacian, diagonal and random kinds
pub const DEFAULT_SIZE: usize = 100;

/// Default grid extent in each direction for the 2D Laplacian
pub const DEFAULT_GRID_EXTENT: usize = 10;

/// Default density for random sparse matrices
pub const DEFAULT_RANDOM_DENSITY: f64 = 0.05;

/// Default diagonal shift for diagonally dominant matrices
pub const DEFAULT_DOMINANCE: f64 = 1.0;

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "test_matrices";

// ============================================================================
// RANDOM GENERATION
// ============================================================================

/// Density of the random component of a diagonally dominant matrix
pub const DIAGONAL_DOMINANT_DENSITY: f64 = 0.1;

/// Lower bound (inclusive) of random entry values
pub const RANDOM_VALUE_LOW: f64 = 0.0;

/// Upper bound (exclusive) of random entry values
pub const RANDOM_VALUE_HIGH: f64 = 1.0;

// ============================================================================
// LAPLACIAN STENCILS
// ============================================================================

/// Diagonal of the three-point 1D stencil
pub const LAPLACE_1D_DIAGONAL: f64 = 2.0;

/// Diagonal of the five-point 2D stencil
pub const LAPLACE_2D_DIAGONAL: f64 = 4.0;

/// Coupling to each grid neighbour
pub const LAPLACE_NEIGHBOR: f64 = -1.0;

// ============================================================================
// REPORTING
// ============================================================================

/// Largest row count for which a dense condition number is attempted
pub const CONDITION_NUMBER_MAX_ROWS: usize = 1000;

/// Matrix Market banner written by the coordinate writer
pub const MATRIX_MARKET_BANNER: &str = "%%MatrixMarket matrix coordinate real general";

/// File extension of Matrix Market files
pub const MATRIX_MARKET_EXTENSION: &str = "mtx";
