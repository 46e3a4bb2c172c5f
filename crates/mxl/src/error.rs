use thiserror::Error;

/// Error type for matrix construction, access and arithmetic.
///
/// Every variant is raised synchronously by the call that violates the
/// precondition. Fallible operations validate before mutating, so a returned
/// error always leaves the receiver exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The operand shapes are incompatible for the requested operation.
    ///
    /// # Examples
    /// - Multiplying a 3x4 matrix by another 3x4 matrix
    /// - Adding a 2x3 matrix to a 3x2 matrix
    #[error("Matrices with sizes {lhs:?} and {rhs:?} cannot be {op}")]
    DimensionMismatch {
        /// Past participle of the operation, e.g. `"multiplied"`.
        op: &'static str,
        /// Shape of the left-hand operand.
        lhs: (usize, usize),
        /// Shape of the right-hand operand.
        rhs: (usize, usize),
    },

    /// A flat sequence does not hold exactly `rows * cols` elements.
    #[error("Cannot convert a sequence of {len} elements to a matrix of size ({rows}, {cols})")]
    ReshapeSizeMismatch {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Number of elements supplied.
        len: usize,
    },

    /// An argument is not one of the accepted values.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A `(row, col)` index lies outside the logical shape.
    #[error("Index ({row}, {col}) out of range for matrix of size ({rows}, {cols})")]
    IndexOutOfRange {
        /// The row that was requested.
        row: usize,
        /// The column that was requested.
        col: usize,
        /// Number of rows in the matrix.
        rows: usize,
        /// Number of columns in the matrix.
        cols: usize,
    },
}

impl MatrixError {
    /// Creates a DimensionMismatch error for the named operation.
    pub fn dimension_mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch { op, lhs, rhs }
    }

    /// Creates a ReshapeSizeMismatch error.
    pub fn reshape_size_mismatch(rows: usize, cols: usize, len: usize) -> Self {
        Self::ReshapeSizeMismatch { rows, cols, len }
    }

    /// Creates an IndexOutOfRange error.
    pub fn index_out_of_range(row: usize, col: usize, shape: (usize, usize)) -> Self {
        Self::IndexOutOfRange {
            row,
            col,
            rows: shape.0,
            cols: shape.1,
        }
    }

    /// Returns true if the error was caused by incompatible or inconsistent shapes.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. } | Self::ReshapeSizeMismatch { .. }
        )
    }

    /// Returns a user-friendly suggestion for resolving the error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::DimensionMismatch { op: "multiplied", .. } => {
                "The number of columns on the left must equal the number of rows on the right"
            }
            Self::DimensionMismatch { .. } => "Both operands must have identical shapes",
            Self::ReshapeSizeMismatch { .. } => {
                "Ensure rows * cols equals the number of data elements"
            }
            Self::InvalidArgument(_) => {
                "Use one of the initializers: zeros, ones, random, identity"
            }
            Self::IndexOutOfRange { .. } => "Verify that 0 <= row < rows and 0 <= col < cols",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MatrixError;

    #[test]
    fn dimension_mismatch_message() {
        let err = MatrixError::dimension_mismatch("multiplied", (3, 4), (3, 4));
        assert_eq!(
            err.to_string(),
            "Matrices with sizes (3, 4) and (3, 4) cannot be multiplied"
        );
        assert!(err.is_shape_error());
    }

    #[test]
    fn reshape_message() {
        let err = MatrixError::reshape_size_mismatch(3, 3, 6);
        assert_eq!(
            err.to_string(),
            "Cannot convert a sequence of 6 elements to a matrix of size (3, 3)"
        );
        assert!(err.is_shape_error());
    }

    #[test]
    fn index_error_is_not_shape_error() {
        let err = MatrixError::index_out_of_range(5, 0, (2, 2));
        assert_eq!(
            err.to_string(),
            "Index (5, 0) out of range for matrix of size (2, 2)"
        );
        assert!(!err.is_shape_error());
        assert_eq!(
            err.suggestion(),
            "Verify that 0 <= row < rows and 0 <= col < cols"
        );
    }
}
