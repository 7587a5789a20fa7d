//! `mx-matrix` - Generic dense matrix with a row-partitioned parallel multiply.
//!
//! This crate provides:
//! - A `Matrix<T>` value type backed by a single row-major buffer
//! - Checked construction and element access
//! - Element-wise add/subtract, scalar scaling and transposition
//! - A `MatmulBackend` trait with sequential and fork/join parallel backends
//! - `ParallelConfig` for worker count and small-problem tuning
//!
//! ```
//! use mx_matrix::Matrix;
//!
//! let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
//! let b = Matrix::from_rows(&[[5, 6], [7, 8]]).unwrap();
//! let c = a.multiply(&b).unwrap();
//! assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
//! ```

pub mod backend;
pub mod config;
pub mod cpu;
mod display;
pub mod element;
pub mod error;
pub mod matrix;
mod ops;
pub mod shape;

// Re-export primary types at the crate root for convenience.
pub use backend::MatmulBackend;
pub use config::ParallelConfig;
pub use cpu::parallel::ParallelBackend;
pub use cpu::SequentialBackend;
pub use element::Element;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use shape::Shape;
