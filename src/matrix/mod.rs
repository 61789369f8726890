// Matrix data structures and the matrix description they are built from

pub mod csr;
pub mod spec;

pub use csr::SparseMatrixCSR;
pub use spec::{MatrixKind, MatrixSpec};
