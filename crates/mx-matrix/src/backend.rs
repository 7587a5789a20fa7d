use std::fmt::Debug;

use crate::element::Element;

/// Trait for pluggable matrix multiplication strategies.
///
/// A backend receives operands that have already been validated by
/// [`Matrix::multiply_with`](crate::Matrix::multiply_with), so it cannot fail:
///
/// - `a`: row-major data of shape [m, k]
/// - `b`: row-major data of shape [k, n]
/// - `out`: row-major destination of shape [m, n]
///
/// Every backend must produce the same values as
/// [`SequentialBackend`](crate::SequentialBackend): cell `(i, j)` is the sum
/// of `a(i, p) * b(p, j)` for `p` ascending, starting from zero.
pub trait MatmulBackend<T: Element>: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "sequential", "parallel").
    fn name(&self) -> &str;

    /// Matrix multiplication: out = a @ b.
    fn matmul_into(&self, a: &[T], b: &[T], out: &mut [T], m: usize, k: usize, n: usize);
}
