use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::shape::Shape;

/// A dense `rows x cols` matrix.
///
/// Elements live in a single row-major buffer: `(i, j)` is stored at
/// `i * cols + j`. The shape is fixed at construction; elements can be
/// changed in place through [`set`](Matrix::set) and
/// [`get_mut`](Matrix::get_mut). Every element access is bounds-checked and
/// reports `OutOfRange` rather than panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    shape: Shape,
}

impl<T: Element> Matrix<T> {
    /// Create a zero-filled matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, T::zero())
    }

    /// Create a matrix with every element set to `fill`.
    ///
    /// # Errors
    /// `InvalidArgument` for a zero dimension, `CapacityExceeded` when
    /// `rows * cols` overflows.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Result<Self> {
        let shape = Shape::new(rows, cols)?;
        Ok(Matrix {
            data: vec![fill; shape.numel()],
            shape,
        })
    }

    /// Build a matrix from a rectangular nested sequence, one inner sequence
    /// per row.
    ///
    /// ```
    /// use mx_matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// assert_eq!(m.get(1, 2).unwrap(), 6);
    /// ```
    ///
    /// # Errors
    /// `InvalidArgument` if there are no rows, the first row is empty, or any
    /// row's length differs from the first.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or_else(|| {
            MatrixError::InvalidArgument("matrix must have at least one row".to_string())
        })?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(MatrixError::InvalidArgument(
                "row length cannot be zero".to_string(),
            ));
        }
        let shape = Shape::new(rows.len(), cols)?;

        let mut data = Vec::with_capacity(shape.numel());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::InvalidArgument(format!(
                    "rows have differing lengths: row 0 has {} elements, row {} has {}",
                    cols,
                    i,
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix { data, shape })
    }

    /// Adopt an existing row-major buffer.
    ///
    /// # Errors
    /// Fails like [`filled`](Matrix::filled) on bad dimensions, and with
    /// `InvalidArgument` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let shape = Shape::new(rows, cols)?;
        if data.len() != shape.numel() {
            return Err(MatrixError::InvalidArgument(format!(
                "data length {} does not match shape {} (numel={})",
                data.len(),
                shape,
                shape.numel()
            )));
        }
        Ok(Matrix { data, shape })
    }

    /// Wrap a buffer whose length is already known to match `shape`.
    pub(crate) fn from_parts(shape: Shape, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), shape.numel());
        Matrix { data, shape }
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of elements (`rows * cols`); never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.shape.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let idx = self.shape.offset(row, col)?;
        Ok(&mut self.data[idx])
    }

    /// Overwrites the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Returns row `i` as a slice, or `None` if `i >= rows`.
    pub fn row(&self, i: usize) -> Option<&[T]> {
        if i >= self.rows() {
            return None;
        }
        let cols = self.cols();
        Some(&self.data[i * cols..(i + 1) * cols])
    }

    /// Iterates over the rows in order.
    pub fn iter_rows(&self) -> std::slice::Chunks<'_, T> {
        self.data.chunks(self.cols())
    }

    /// The row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The row-major buffer, mutably. The shape cannot change through it.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Matrix::from_rows(&rows)
    }
}
