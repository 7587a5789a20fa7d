use thiserror::Error;

use crate::shape::Shape;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("matrix size {rows}x{cols} exceeds maximum capacity")]
    CapacityExceeded { rows: usize, cols: usize },
    #[error("{op} dimension mismatch: {lhs} vs {rhs}")]
    DimensionMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },
    #[error("index ({row}, {col}) out of range for matrix {shape}")]
    OutOfRange { row: usize, col: usize, shape: Shape },
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
