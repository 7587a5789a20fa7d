use crate::backend::MatmulBackend;
use crate::cpu::parallel::ParallelBackend;
use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

impl<T: Element> Matrix<T> {
    /// Element-wise sum: result(i, j) = self(i, j) + other(i, j).
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(other, "add", |x, y| x + y)
    }

    /// Element-wise difference: result(i, j) = self(i, j) - other(i, j).
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(other, "subtract", |x, y| x - y)
    }

    /// Scalar multiplication: result(i, j) = self(i, j) * scalar.
    pub fn scale(&self, scalar: T) -> Matrix<T> {
        let data = self.as_slice().iter().map(|&x| x * scalar).collect();
        Matrix::from_parts(self.shape(), data)
    }

    /// Returns the `cols x rows` matrix with result(j, i) = self(i, j).
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = (self.rows(), self.cols());
        let src = self.as_slice();
        let mut data = Vec::with_capacity(src.len());
        for j in 0..cols {
            data.extend((0..rows).map(|i| src[i * cols + j]));
        }
        Matrix::from_parts(self.shape().transposed(), data)
    }

    /// Matrix product `self @ other` using the parallel backend with its
    /// default configuration.
    ///
    /// self is [m, k], other is [k, n], result is [m, n].
    ///
    /// # Errors
    /// `DimensionMismatch` if `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.multiply_with(other, &ParallelBackend::new())
    }

    /// Matrix product `self @ other` using the given backend.
    ///
    /// Shapes are checked here, before the backend runs, so the backend itself
    /// never fails and no work is dispatched for an invalid product.
    pub fn multiply_with(
        &self,
        other: &Matrix<T>,
        backend: &dyn MatmulBackend<T>,
    ) -> Result<Matrix<T>> {
        let shape = self.shape().matmul(&other.shape())?;
        let (m, k, n) = (self.rows(), self.cols(), other.cols());

        let mut data = vec![T::zero(); shape.numel()];
        backend.matmul_into(self.as_slice(), other.as_slice(), &mut data, m, k, n);
        Ok(Matrix::from_parts(shape, data))
    }

    fn zip_with(
        &self,
        other: &Matrix<T>,
        op: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<Matrix<T>> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(&x, &y)| f(x, y))
            .collect();
        Ok(Matrix::from_parts(self.shape(), data))
    }
}
