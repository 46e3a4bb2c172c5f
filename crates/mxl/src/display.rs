use std::fmt;

use crate::Matrix;

impl<T: fmt::Display> Matrix<T> {
    /// Renders the matrix one row per line, e.g.
    ///
    /// ```text
    /// [[1, 2, 3]
    ///  [4, 5, 6]]
    /// ```
    ///
    /// Rows follow the logical order whatever the access order. Every line
    /// ends with a newline and an empty matrix renders as `"[]\n"`.
    ///
    /// # Example
    ///
    /// ```
    /// use mxl::matrix;
    ///
    /// let m = matrix![[1, 2], [3, 4]];
    /// assert_eq!(m.to_text(), "[[1, 2]\n [3, 4]]\n");
    /// ```
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Writes [`Matrix::to_text`] to standard output.
    pub fn display(&self) {
        print!("{self}");
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.shape();
        if rows == 0 || cols == 0 {
            return writeln!(f, "[]");
        }
        for i in 0..rows {
            let open = if i == 0 { "[[" } else { " [" };
            let close = if i + 1 == rows { "]]" } else { "]" };
            f.write_str(open)?;
            for j in 0..cols {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", self[(i, j)])?;
            }
            writeln!(f, "{close}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{matrix, Matrix};

    #[test]
    fn display_2d() {
        let m = matrix![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
        assert_eq!(m.to_text(), "[[1, 2, 3]\n [4, 5, 6]\n [7, 8, 9]]\n");
        assert_eq!(format!("{m}"), m.to_text());
    }

    #[test]
    fn display_transposed() {
        let mut m = matrix![[1, 2, 3], [4, 5, 6]];
        m.transpose();
        assert_eq!(m.to_text(), "[[1, 4]\n [2, 5]\n [3, 6]]\n");
    }

    #[test]
    fn display_single_row_and_column() {
        assert_eq!(matrix![[1, 2, 3]].to_text(), "[[1, 2, 3]]\n");
        assert_eq!(
            matrix![[1], [2], [3]].to_text(),
            "[[1]\n [2]\n [3]]\n"
        );
        assert_eq!(matrix![[5]].to_text(), "[[5]]\n");
    }

    #[test]
    fn display_float() {
        let m = matrix![[0.5, 1.25], [-2.0, 3.0]];
        assert_eq!(m.to_text(), "[[0.5, 1.25]\n [-2, 3]]\n");
    }

    #[test]
    fn display_empty() {
        assert_eq!(Matrix::<i32>::new().to_text(), "[]\n");
        assert_eq!(Matrix::from_shape_val(3, 0, 1).to_text(), "[]\n");
    }
}
