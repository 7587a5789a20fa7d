use std::fmt;

use crate::element::Element;
use crate::matrix::Matrix;

/// Width of each rendered element.
const FIELD_WIDTH: usize = 8;

/// Renders one row per line with every element right-aligned in an
/// 8-character field.
///
/// ```
/// use mx_matrix::Matrix;
///
/// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
/// assert_eq!(m.to_string(), "       1       2\n       3       4\n");
/// ```
impl<T: Element + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for x in row {
                write!(f, "{:>width$}", x, width = FIELD_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
