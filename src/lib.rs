//! # matgen: sparse test matrices for iterative solvers
//!
//! matgen builds synthetic sparse matrices and saves them in Matrix Market
//! coordinate format, ready to be fed to GMRES and friends.
//!
//! ## Matrix families
//!
//! - **laplace1d**: tridiagonal `[-1 2 -1]` stencil
//! - **laplace2d**: five-point stencil on an `nx × ny` grid, node `(i, j)` at
//!   row `i*ny + j`
//! - **diagonal**: random sparse matrix (density 0.1) plus `dominance · I`
//! - **random**: random sparse matrix at a given density plus `I`
//!
//! Random entries are Uniform[0, 1) at uniformly sampled positions. Pass a
//! seed to [`MatrixFactory::new`] to make them reproducible.
//!
//! ## Usage
//!
//! ```
//! use matgen::{MatrixFactory, MatrixSpec};
//!
//! let mut factory = MatrixFactory::new(42);
//! let a = factory.build(&MatrixSpec::Laplace2d { nx: 2, ny: 2 }).unwrap();
//! assert_eq!(a.shape(), (4, 4));
//! assert_eq!(a.nnz(), 12);
//! ```
//!
//! Writing a matrix:
//!
//! ```no_run
//! use matgen::{MatrixFactory, MatrixSpec, MatrixWriter, OutputFormat};
//!
//! let spec = MatrixSpec::Laplace1d { n: 100 };
//! let a = MatrixFactory::new(0).build(&spec).unwrap();
//! let writer = MatrixWriter::new(OutputFormat::MatrixMarket);
//! writer.write(std::path::Path::new(&spec.file_name()), &a).unwrap();
//! ```

pub mod cli;
pub mod constants;
pub mod error;
pub mod factory;
pub mod generate;
pub mod matrix;
pub mod matrix_market;
pub mod report;
pub mod utils;
pub mod writer;

// Re-export primary components
pub use error::{MatgenError, Result};
pub use factory::MatrixFactory;
pub use generate::{generate, Generated};
pub use matrix::{MatrixKind, MatrixSpec, SparseMatrixCSR};
pub use matrix_market::MatrixMarketIO;
pub use report::{condition_number, MatrixInfo};
pub use utils::{from_sprs_csr, to_sprs_csr};
pub use writer::{MatrixWriter, OutputFormat};

/// Version information for the matgen library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
