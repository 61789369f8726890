//! Error types for matgen

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatgenError>;

#[derive(Error, Debug)]
pub enum MatgenError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Numeric estimate failed: {0}")]
    NumericEstimate(String),
}

impl MatgenError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        MatgenError::Parse {
            line,
            message: message.into(),
        }
    }
}
