//! Arithmetic on matrices.
//!
//! The `try_*` methods are the fallible contract: they check shapes first and
//! leave the receiver untouched on error. The `std::ops` operators are sugar
//! over them and panic with the same [`MatrixError`] message instead.

use std::ops::{Add, AddAssign, Mul, MulAssign};

use log::debug;

use crate::{element::Element, error::MatrixError, Matrix};

impl<T: Element> Matrix<T> {
    /// Multiplies `self` by `rhs` in place, `self = self * rhs`.
    ///
    /// Uses the naive triple loop into a freshly allocated
    /// `self.rows() x rhs.cols()` result which then replaces the receiver.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `self.cols() != rhs.rows()`.
    /// The receiver is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use mxl::{matrix, Matrix};
    ///
    /// let mut a = matrix![[1, 2], [3, 4]];
    /// a.try_mul_assign(&Matrix::identity(2, 2)).unwrap();
    /// assert_eq!(a, matrix![[1, 2], [3, 4]]);
    ///
    /// assert!(a.try_mul_assign(&Matrix::zeros(3, 3)).is_err());
    /// assert_eq!(a.shape(), (2, 2));
    /// ```
    pub fn try_mul_assign(&mut self, rhs: &Matrix<T>) -> Result<&mut Self, MatrixError> {
        *self = self.try_mul(rhs)?;
        Ok(self)
    }

    /// Returns the matrix product `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `self.cols() != rhs.rows()`.
    pub fn try_mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.cols() != rhs.rows() {
            return Err(MatrixError::dimension_mismatch(
                "multiplied",
                self.shape(),
                rhs.shape(),
            ));
        }
        debug!("multiplying {:?} by {:?}", self.shape(), rhs.shape());

        let inner = self.cols();
        Ok(Matrix::from_shape_fn(self.rows(), rhs.cols(), |i, j| {
            let mut acc = T::zero();
            for k in 0..inner {
                acc += self[(i, k)] * rhs[(k, j)];
            }
            acc
        }))
    }

    /// Adds `rhs` to `self` in place.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless both shapes are identical.
    /// The receiver is unchanged in that case.
    pub fn try_add_assign(&mut self, rhs: &Matrix<T>) -> Result<&mut Self, MatrixError> {
        *self = self.try_add(rhs)?;
        Ok(self)
    }

    /// Returns the element-wise sum `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless both shapes are identical.
    pub fn try_add(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::dimension_mismatch(
                "added",
                self.shape(),
                rhs.shape(),
            ));
        }
        debug!("adding {:?} matrices", self.shape());

        Ok(Matrix::from_shape_fn(self.rows(), self.cols(), |i, j| {
            self[(i, j)] + rhs[(i, j)]
        }))
    }

    /// Multiplies every element by `scalar` in place.
    pub fn scale(&mut self, scalar: T) -> &mut Self {
        self.iter_mut().for_each(|x| *x *= scalar);
        self
    }
}

/// Unwraps `result`, panicking with the error's `Display` message.
fn expect_shapes<T>(result: Result<T, MatrixError>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

impl<T: Element> MulAssign<&Matrix<T>> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if `self.cols() != rhs.rows()`. See [`Matrix::try_mul_assign`].
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        expect_shapes(self.try_mul_assign(rhs));
    }
}

impl<T: Element> MulAssign<Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: Matrix<T>) {
        *self *= &rhs;
    }
}

impl<T: Element> AddAssign<&Matrix<T>> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if the shapes differ. See [`Matrix::try_add_assign`].
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        expect_shapes(self.try_add_assign(rhs));
    }
}

impl<T: Element> AddAssign<Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: Matrix<T>) {
        *self += &rhs;
    }
}

impl<T: Element> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.scale(scalar);
    }
}

impl<T: Element> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if `self.cols() != rhs.rows()`. See [`Matrix::try_mul`].
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        expect_shapes(self.try_mul(rhs))
    }
}

impl<T: Element> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Element> Mul<Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Element> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the shapes differ. See [`Matrix::try_add`].
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        expect_shapes(self.try_add(rhs))
    }
}

impl<T: Element> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Element> Add<Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Element> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, scalar: T) -> Matrix<T> {
        self.scale(scalar);
        self
    }
}

impl<T: Element> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.clone() * scalar
    }
}

// `scalar * matrix` cannot be written generically over `T`.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_lhs_mul!(f32, f64, i32, i64, i128, isize, u32, u64, u128, usize);
