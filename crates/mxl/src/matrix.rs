use std::ops::{Index, IndexMut};

use log::trace;
use rand::Rng;

use crate::{element::Element, error::MatrixError, init::Initializer, layout::AccessOrder};

/// A dense `rows x cols` matrix backed by a single flat buffer.
///
/// The matrix owns its buffer exclusively; cloning deep-copies it. Element
/// `(i, j)` lives at `storage[order.offset(i, j, rows, cols)]`, see
/// [`AccessOrder`]. Swapping `rows`/`cols` together with flipping the order is
/// a transpose, which is why [`Matrix::transpose`] runs in constant time and
/// never touches the elements.
///
/// # Invariants
///
/// * `storage.len() == rows * cols` after every operation completes.
/// * Indexing is always checked against the logical shape.
///
/// # Examples
///
/// ```
/// use mxl::{matrix, Matrix};
///
/// let mut m = matrix![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[(1, 0)], 4);
///
/// m.transpose();
/// assert_eq!(m.shape(), (3, 2));
/// assert_eq!(m[(0, 1)], 4);
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    storage: Vec<T>,
    order: AccessOrder,
}

/// Fails unless `len` equals `rows * cols`, an overflowing product never matches.
fn check_numel(rows: usize, cols: usize, len: usize) -> Result<(), MatrixError> {
    if rows.checked_mul(cols) != Some(len) {
        return Err(MatrixError::reshape_size_mismatch(rows, cols, len));
    }
    Ok(())
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Matrix<T> {
    /// Creates an empty `0 x 0` matrix in the canonical order.
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            storage: Vec::new(),
            order: AccessOrder::RowMajor,
        }
    }

    /// Creates a `rows x cols` matrix by reshaping a flat row-major vector.
    ///
    /// The vector is moved into the matrix, no element is copied.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ReshapeSizeMismatch`] if `data.len() != rows * cols`.
    ///
    /// # Example
    ///
    /// ```
    /// use mxl::Matrix;
    ///
    /// let m = Matrix::from_shape_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m.to_2d(), vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    ///
    /// assert!(Matrix::from_shape_vec(3, 3, vec![1, 2, 3, 4, 5, 6]).is_err());
    /// ```
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        check_numel(rows, cols, data.len())?;
        Ok(Self {
            rows,
            cols,
            storage: data,
            order: AccessOrder::RowMajor,
        })
    }

    /// Creates a `rows x cols` matrix whose element `(i, j)` is `f(i, j)`.
    ///
    /// `f` is called in row-major order.
    ///
    /// # Example
    ///
    /// ```
    /// use mxl::Matrix;
    ///
    /// let m = Matrix::from_shape_fn(2, 2, |i, j| i * 2 + j);
    /// assert_eq!(m.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn from_shape_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut storage = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                storage.push(f(i, j));
            }
        }
        Self {
            rows,
            cols,
            storage,
            order: AccessOrder::RowMajor,
        }
    }

    /// Returns the `(rows, cols)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements, `rows * cols`.
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// The order currently used to read the storage buffer.
    #[inline]
    pub fn order(&self) -> AccessOrder {
        self.order
    }

    /// Returns true if an odd number of in-place transposes has been applied
    /// since the buffer was last laid out row by row.
    #[inline]
    pub fn is_transposed(&self) -> bool {
        self.order == AccessOrder::ColMajor
    }

    /// The raw storage buffer, in storage order (not necessarily row-major).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// The raw storage buffer, mutable.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.storage
    }

    /// Iterates over the elements in storage order.
    ///
    /// Use [`Matrix::to_2d`] or indexing when the logical order matters.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Mutable iterator over the elements in storage order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.storage.iter_mut()
    }

    /// Consumes the matrix and returns its storage buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    /// Returns true if the buffer is laid out row by row.
    pub fn is_standard_layout(&self) -> bool {
        self.order == AccessOrder::RowMajor
    }

    /// Storage offset of `(row, col)`, or `None` if it lies outside the shape.
    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols)
            .then(|| self.order.offset(row, col, self.rows, self.cols))
    }

    /// Logical `(row, col)` positions in row-major order.
    pub(crate) fn indices(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |i| (0..cols).map(move |j| (i, j)))
    }

    /// Returns a reference to element `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).and_then(|i| self.storage.get(i))
    }

    /// Returns a mutable reference to element `(row, col)`, or `None` if out of range.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.offset(row, col).and_then(|i| self.storage.get_mut(i))
    }

    /// Returns a mutable reference to element `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if the position lies outside the shape.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let shape = self.shape();
        self.get_mut(row, col)
            .ok_or_else(|| MatrixError::index_out_of_range(row, col, shape))
    }

    /// Transposes the matrix in place in constant time and returns it for chaining.
    ///
    /// Only the dimensions and the access order change, the buffer is left
    /// untouched. Transposing twice restores the original matrix and order.
    ///
    /// # Example
    ///
    /// ```
    /// use mxl::matrix;
    ///
    /// let mut m = matrix![[1, 2, 3], [4, 5, 6]];
    /// let before = m.clone();
    ///
    /// m.transpose();
    /// assert_eq!(m.to_2d(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    /// assert_eq!(m.as_slice(), before.as_slice());
    ///
    /// assert_eq!(*m.transpose(), before);
    /// ```
    pub fn transpose(&mut self) -> &mut Self {
        std::mem::swap(&mut self.rows, &mut self.cols);
        self.order = self.order.flipped();
        trace!(
            "transposed in place to ({}, {}), order {:?}",
            self.rows,
            self.cols,
            self.order
        );
        self
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a `rows x cols` matrix with every element set to `value`.
    ///
    /// Zero rows or columns are allowed and give an empty matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use mxl::Matrix;
    ///
    /// let m = Matrix::from_shape_val(2, 3, 7);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&x| x == 7));
    /// ```
    pub fn from_shape_val(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            storage: vec![value; rows * cols],
            order: AccessOrder::RowMajor,
        }
    }

    /// Creates a `rows x cols` matrix by copying a flat row-major slice.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ReshapeSizeMismatch`] if `data.len() != rows * cols`.
    pub fn from_shape_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self, MatrixError> {
        check_numel(rows, cols, data.len())?;
        Ok(Self {
            rows,
            cols,
            storage: data.to_vec(),
            order: AccessOrder::RowMajor,
        })
    }

    /// Creates a matrix from possibly ragged rows, padding short rows with `fill`.
    ///
    /// The result has one row per input row and as many columns as the longest
    /// input row. Never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use mxl::Matrix;
    ///
    /// let m = Matrix::from_rows_padded(&[vec![1, 2, 3], vec![4, 5]], 0);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 2)], 0);
    /// ```
    pub fn from_rows_padded<R>(rows: &[R], fill: T) -> Self
    where
        R: AsRef<[T]>,
    {
        let cols = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut out = Self::from_shape_val(rows.len(), cols, fill);
        for (i, row) in rows.iter().enumerate() {
            let start = i * cols;
            let row = row.as_ref();
            out.storage[start..start + row.len()].clone_from_slice(row);
        }
        out
    }

    /// Returns element `(row, col)` by value.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if the position lies outside the shape.
    pub fn at(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.get(row, col)
            .cloned()
            .ok_or_else(|| MatrixError::index_out_of_range(row, col, self.shape()))
    }

    /// Returns a new matrix equal to the transpose of this one.
    ///
    /// The receiver is not modified. The copy shares the receiver's buffer
    /// layout and reads it in the flipped order.
    pub fn transpose_copy(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            storage: self.storage.clone(),
            order: self.order.flipped(),
        }
    }

    /// Returns the same logical matrix with its buffer laid out row by row.
    ///
    /// Clones when the matrix is already in standard layout, otherwise copies
    /// every element once into the new order.
    ///
    /// # Example
    ///
    /// ```
    /// use mxl::matrix;
    ///
    /// let mut m = matrix![[1, 2], [3, 4]];
    /// m.transpose();
    /// assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    ///
    /// let s = m.to_standard_layout();
    /// assert!(s.is_standard_layout());
    /// assert_eq!(s.as_slice(), &[1, 3, 2, 4]);
    /// assert_eq!(s, m);
    /// ```
    pub fn to_standard_layout(&self) -> Self {
        if self.is_standard_layout() {
            return self.clone();
        }
        Self::from_shape_fn(self.rows, self.cols, |i, j| {
            self.storage[self.order.offset(i, j, self.rows, self.cols)].clone()
        })
    }

    /// Returns the elements as a vector of rows, in logical order.
    pub fn to_2d(&self) -> Vec<Vec<T>> {
        (0..self.rows)
            .map(|i| {
                (0..self.cols)
                    .map(|j| self.storage[self.order.offset(i, j, self.rows, self.cols)].clone())
                    .collect()
            })
            .collect()
    }

    /// Returns a copy of row `i`, or `None` if `i >= rows`.
    pub fn row(&self, i: usize) -> Option<Vec<T>> {
        (i < self.rows).then(|| {
            (0..self.cols)
                .map(|j| self.storage[self.order.offset(i, j, self.rows, self.cols)].clone())
                .collect()
        })
    }
}

impl<T: Element> Matrix<T> {
    /// Creates a `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_shape_val(rows, cols, T::zero())
    }

    /// Creates a `rows x cols` matrix of ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_shape_val(rows, cols, T::one())
    }

    /// Creates a `rows x cols` matrix with ones on the main diagonal.
    ///
    /// Positions `(k, k)` for `k < min(rows, cols)` are one, all others zero.
    ///
    /// # Example
    ///
    /// ```
    /// use mxl::{matrix, Matrix};
    ///
    /// let eye = Matrix::<i32>::identity(2, 3);
    /// assert_eq!(eye, matrix![[1, 0, 0], [0, 1, 0]]);
    /// ```
    pub fn identity(rows: usize, cols: usize) -> Self {
        let mut out = Self::zeros(rows, cols);
        for k in 0..rows.min(cols) {
            out.storage[k * cols + k] = T::one();
        }
        out
    }

    /// Creates a `rows x cols` matrix of independent random draws.
    ///
    /// Uses the thread-local generator, so repeated calls differ. See
    /// [`Element::sample`] for the distributions and [`Matrix::random_with`]
    /// for reproducible draws.
    pub fn random(rows: usize, cols: usize) -> Self {
        Self::random_with(rows, cols, &mut rand::rng())
    }

    /// Creates a `rows x cols` matrix of random draws taken from `rng`.
    ///
    /// # Example
    ///
    /// ```
    /// use mxl::Matrix;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let a = Matrix::<f64>::random_with(3, 3, &mut StdRng::seed_from_u64(1));
    /// let b = Matrix::<f64>::random_with(3, 3, &mut StdRng::seed_from_u64(1));
    /// assert_eq!(a, b);
    /// assert!(a.iter().all(|x| (0.0..1.0).contains(x)));
    /// ```
    pub fn random_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        Self::from_shape_fn(rows, cols, |_, _| T::sample(&mut *rng))
    }

    /// Creates a `rows x cols` matrix using a named [`Initializer`].
    pub fn from_initializer(rows: usize, cols: usize, init: Initializer) -> Self {
        match init {
            Initializer::Zeros => Self::zeros(rows, cols),
            Initializer::Ones => Self::ones(rows, cols),
            Initializer::Random => Self::random(rows, cols),
            Initializer::Identity => Self::identity(rows, cols),
        }
    }

    /// Creates a `rows x cols` matrix from an initializer name.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidArgument`] unless `name` is one of
    /// `zeros`, `ones`, `random` or `identity`.
    ///
    /// # Example
    ///
    /// ```
    /// use mxl::Matrix;
    ///
    /// let ones = Matrix::<i64>::from_initializer_name(2, 2, "ones").unwrap();
    /// assert_eq!(ones.as_slice(), &[1, 1, 1, 1]);
    /// assert!(Matrix::<i64>::from_initializer_name(2, 2, "twos").is_err());
    /// ```
    pub fn from_initializer_name(rows: usize, cols: usize, name: &str) -> Result<Self, MatrixError> {
        let init: Initializer = name.parse()?;
        Ok(Self::from_initializer(rows, cols, init))
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    /// Builds an `R x C` matrix from a nested array literal, row by row.
    fn from(rows: [[T; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            storage: rows.into_iter().flatten().collect(),
            order: AccessOrder::RowMajor,
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the shape.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Some(v) => v,
            None => panic!("{}", MatrixError::index_out_of_range(row, col, self.shape())),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the shape.
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let shape = self.shape();
        match self.get_mut(row, col) {
            Some(v) => v,
            None => panic!("{}", MatrixError::index_out_of_range(row, col, shape)),
        }
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    /// Two matrices are equal when their shapes match and every logical
    /// element compares equal, whatever their access orders.
    fn eq(&self, other: &Self) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        if self.order == other.order {
            return self.storage == other.storage;
        }
        self.indices().all(|(i, j)| {
            self.storage[self.order.offset(i, j, self.rows, self.cols)]
                == other.storage[other.order.offset(i, j, other.rows, other.cols)]
        })
    }
}

impl<T: Eq> Eq for Matrix<T> {}

#[cfg(test)]
mod tests {
    use crate::error::MatrixError;
    use crate::init::Initializer;
    use crate::layout::AccessOrder;
    use crate::Matrix;

    #[test]
    fn default_is_empty() {
        let m = Matrix::<i32>::default();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
        assert!(!m.is_transposed());
        assert_eq!(m, Matrix::new());
    }

    #[test]
    fn from_shape_val_2d() {
        let m = Matrix::from_shape_val(7, 12, 3.5);
        assert_eq!(m.shape(), (7, 12));
        assert_eq!(m.numel(), 84);
        assert_eq!(m.to_2d(), vec![vec![3.5; 12]; 7]);
    }

    #[test]
    fn from_shape_val_empty() {
        let m = Matrix::from_shape_val(0, 5, 1u32);
        assert_eq!(m.shape(), (0, 5));
        assert!(m.is_empty());
        let m = Matrix::from_shape_val(4, 0, 1u32);
        assert_eq!(m.shape(), (4, 0));
        assert_eq!(m.to_2d(), vec![Vec::<u32>::new(); 4]);
    }

    #[test]
    fn from_shape_vec_2d() -> Result<(), MatrixError> {
        let data: Vec<i64> = vec![1, 2, 3, 4, 5, 6];
        let m = Matrix::from_shape_vec(3, 2, data.clone())?;
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(m.at(i, j)?, data[i * 2 + j]);
            }
        }
        Ok(())
    }

    #[test]
    fn from_shape_vec_wrong_len() {
        let data: Vec<i64> = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let err = Matrix::from_shape_vec(3, 3, data).unwrap_err();
        assert_eq!(err, MatrixError::reshape_size_mismatch(3, 3, 8));

        let err = Matrix::from_shape_slice(3, 3, &[0u8; 6]).unwrap_err();
        assert_eq!(err, MatrixError::reshape_size_mismatch(3, 3, 6));
    }

    #[test]
    fn from_shape_vec_overflowing_shape() {
        let rows = 1 << (usize::BITS - 1);
        let err = Matrix::<i32>::from_shape_vec(rows, 2, vec![]).unwrap_err();
        assert_eq!(err, MatrixError::reshape_size_mismatch(rows, 2, 0));

        let err = Matrix::<i32>::from_shape_slice(2, rows, &[]).unwrap_err();
        assert_eq!(err, MatrixError::reshape_size_mismatch(2, rows, 0));
    }

    #[test]
    fn from_rows_padded_rectangular() {
        let v = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]];
        let m = Matrix::from_rows_padded(&v, 0);
        assert_eq!(m.shape(), (2, 4));
        assert_eq!(m.to_2d(), v);
    }

    #[test]
    fn from_rows_padded_ragged() {
        let m = Matrix::from_rows_padded(&[vec![1, 2, 3], vec![4, 5]], 0);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(1, 2)], 0);
        assert_eq!(m.to_2d(), vec![vec![1, 2, 3], vec![4, 5, 0]]);

        let m = Matrix::from_rows_padded(&[vec![], vec![9], vec![]], -1);
        assert_eq!(m.to_2d(), vec![vec![-1], vec![9], vec![-1]]);

        let m = Matrix::<i32>::from_rows_padded::<Vec<i32>>(&[], 0);
        assert_eq!(m.shape(), (0, 0));
    }

    #[test]
    fn from_nested_literal() {
        let m = Matrix::from([[1, 2, 3, 4], [5, 6, 7, 8]]);
        assert_eq!(m.shape(), (2, 4));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(m, crate::matrix![[1, 2, 3, 4], [5, 6, 7, 8]]);
    }

    #[test]
    fn identity_7x7() {
        let m = Matrix::<i32>::identity(7, 7);
        for i in 0..7 {
            for j in 0..7 {
                assert_eq!(m[(i, j)], if i == j { 1 } else { 0 });
            }
        }
    }

    #[test]
    fn identity_non_square() {
        let m = Matrix::<f32>::identity(3, 2);
        assert_eq!(
            m.to_2d(),
            vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]]
        );
    }

    #[test]
    fn initializers() -> Result<(), MatrixError> {
        assert_eq!(
            Matrix::<i32>::from_initializer(2, 2, Initializer::Zeros).as_slice(),
            &[0; 4]
        );
        assert_eq!(
            Matrix::<i32>::from_initializer_name(2, 2, "ones")?.as_slice(),
            &[1; 4]
        );
        let r = Matrix::<u64>::from_initializer_name(4, 5, "random")?;
        assert_eq!(r.shape(), (4, 5));
        assert!(r.iter().all(|&x| x <= 1_000_000));
        assert_eq!(
            Matrix::<i32>::from_initializer_name(2, 2, "eye"),
            Err(MatrixError::InvalidArgument(
                "unknown initializer 'eye'".to_string()
            ))
        );
        Ok(())
    }

    #[test]
    fn get_checked() {
        let m = Matrix::from([[1u8, 2], [3, 4]]);
        assert_eq!(m.get(0, 1), Some(&2));
        assert_eq!(m.get(1, 0), Some(&3));
        assert!(m.get(2, 0).is_none());
        assert!(m.get(0, 2).is_none());
        assert_eq!(m.at(1, 2), Err(MatrixError::index_out_of_range(1, 2, (2, 2))));
    }

    #[test]
    fn at_mut_writes_through() -> Result<(), MatrixError> {
        let mut m = Matrix::from_shape_val(2, 3, 0);
        *m.at_mut(1, 2)? = 9;
        m[(0, 1)] = 4;
        assert_eq!(m.as_slice(), &[0, 4, 0, 0, 0, 9]);
        assert!(m.at_mut(2, 0).is_err());
        Ok(())
    }

    #[test]
    #[should_panic(expected = "Index (0, 3) out of range for matrix of size (3, 3)")]
    fn index_out_of_range_panics() {
        let m = Matrix::<i32>::zeros(3, 3);
        let _ = m[(0, 3)];
    }

    #[test]
    fn transpose_in_place() {
        let mut m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        m.transpose();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.order(), AccessOrder::ColMajor);
        assert!(m.is_transposed());
        assert_eq!(m.to_2d(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        // no element moved
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn transpose_twice_restores() {
        let original = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        let mut m = original.clone();
        m.transpose().transpose();
        assert_eq!(m, original);
        assert_eq!(m.order(), original.order());
    }

    #[test]
    fn write_after_transpose() {
        let mut m = Matrix::<i32>::zeros(2, 3);
        m.transpose();
        m[(2, 1)] = 7;
        m.transpose();
        assert_eq!(m[(1, 2)], 7);
        assert_eq!(m.as_slice(), &[0, 0, 0, 0, 0, 7]);
    }

    #[test]
    fn transpose_copy_leaves_receiver() {
        let m = Matrix::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let before = m.clone();
        let t = m.transpose_copy();
        assert_eq!(m, before);
        assert_eq!(m.order(), before.order());
        assert_eq!(t.to_2d(), vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]]);

        let mut manual = m.clone();
        manual.transpose();
        assert_eq!(t, manual);
    }

    #[test]
    fn equality_ignores_order() {
        let row_major = Matrix::from([[1, 3], [2, 4]]);
        let mut col_major = Matrix::from([[1, 2], [3, 4]]);
        col_major.transpose();
        assert_ne!(row_major.as_slice(), col_major.as_slice());
        assert_eq!(row_major, col_major);

        let mut other = row_major.clone();
        other[(1, 1)] = 5;
        assert_ne!(other, col_major);
    }

    #[test]
    fn equality_shape_mismatch() {
        let a = Matrix::from_shape_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let b = Matrix::from_shape_vec(3, 2, vec![1, 2, 3, 4, 5, 6]);
        assert_ne!(a, b);
    }

    #[test]
    fn standard_layout_roundtrip() {
        let mut m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        assert!(m.is_standard_layout());
        m.transpose();
        assert!(!m.is_standard_layout());
        let s = m.to_standard_layout();
        assert!(s.is_standard_layout());
        assert_eq!(s.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(s, m);
    }

    #[test]
    fn rows_in_logical_order() {
        let mut m = Matrix::from([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(m.row(2), Some(vec![5, 6]));
        m.transpose();
        assert_eq!(m.row(0), Some(vec![1, 3, 5]));
        assert_eq!(m.row(2), None);
    }

    #[test]
    fn clone_is_deep() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        let mut b = a.clone();
        b[(0, 0)] = 100;
        assert_eq!(a[(0, 0)], 1);
    }
}
