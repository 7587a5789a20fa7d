use crate::error::{MatrixError, Result};
use std::fmt;

/// Validated dimensions of a matrix.
///
/// Both dimensions are at least 1 and `rows * cols` fits in a `usize`; the
/// only way to obtain a `Shape` is through [`Shape::new`], which enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Create a shape of `rows` x `cols`.
    ///
    /// # Errors
    /// - `InvalidArgument` if either dimension is zero.
    /// - `CapacityExceeded` if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidArgument(format!(
                "matrix dimensions cannot be zero (got {}x{})",
                rows, cols
            )));
        }
        if rows.checked_mul(cols).is_none() {
            return Err(MatrixError::CapacityExceeded { rows, cols });
        }
        Ok(Shape { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if `(row, col)` lies inside this shape.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Row-major offset of `(row, col)`, or `OutOfRange`.
    pub fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if !self.contains(row, col) {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                shape: *self,
            });
        }
        Ok(row * self.cols + col)
    }

    /// The shape with rows and columns swapped.
    pub fn transposed(&self) -> Shape {
        Shape {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Shape of `self @ rhs`, or `DimensionMismatch` if the inner dimensions
    /// differ.
    pub fn matmul(&self, rhs: &Shape) -> Result<Shape> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: *self,
                rhs: *rhs,
            });
        }
        Shape::new(self.rows, rhs.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}x{}]", self.rows, self.cols)
    }
}

impl TryFrom<(usize, usize)> for Shape {
    type Error = MatrixError;

    fn try_from((rows, cols): (usize, usize)) -> Result<Self> {
        Shape::new(rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_shape() {
        let s = Shape::new(2, 3).unwrap();
        assert_eq!(s.rows(), 2);
        assert_eq!(s.cols(), 3);
        assert_eq!(s.numel(), 6);
    }

    #[test]
    fn test_zero_dims() {
        assert!(matches!(
            Shape::new(0, 5),
            Err(MatrixError::InvalidArgument(_))
        ));
        assert!(matches!(
            Shape::new(5, 0),
            Err(MatrixError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_capacity_exceeded() {
        assert_eq!(
            Shape::new(usize::MAX, 2),
            Err(MatrixError::CapacityExceeded {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert!(Shape::new(usize::MAX, 1).is_ok());
    }

    #[test]
    fn test_offset() {
        let s = Shape::new(2, 3).unwrap();
        assert_eq!(s.offset(0, 0).unwrap(), 0);
        assert_eq!(s.offset(1, 2).unwrap(), 5);
        assert!(matches!(
            s.offset(2, 0),
            Err(MatrixError::OutOfRange { row: 2, col: 0, .. })
        ));
        assert!(s.offset(0, 3).is_err());
    }

    #[test]
    fn test_transposed() {
        let s = Shape::new(2, 3).unwrap();
        assert_eq!(s.transposed(), Shape::new(3, 2).unwrap());
    }

    #[test]
    fn test_matmul_shape() {
        let a = Shape::new(2, 3).unwrap();
        let b = Shape::new(3, 4).unwrap();
        assert_eq!(a.matmul(&b).unwrap(), Shape::new(2, 4).unwrap());
        assert!(matches!(
            b.matmul(&a),
            Err(MatrixError::DimensionMismatch { op: "multiply", .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::new(2, 3).unwrap().to_string(), "[2x3]");
    }
}
