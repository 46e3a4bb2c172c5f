/// The order in which a matrix walks its flat storage buffer.
///
/// A matrix never moves its elements to transpose. Instead it swaps its
/// `rows`/`cols` and flips the access order, so the same buffer is read the
/// other way round. The two orders are two affine maps from `(row, col)` to a
/// flat offset:
///
/// * [`AccessOrder::RowMajor`]: `row * cols + col`
/// * [`AccessOrder::ColMajor`]: `col * rows + row`
///
/// # Examples
///
/// ```
/// use mxl::AccessOrder;
///
/// // a 2x3 matrix [[a, b, c], [d, e, f]] stored as [a, b, c, d, e, f]
/// assert_eq!(AccessOrder::RowMajor.offset(1, 2, 2, 3), 5);
///
/// // after a transpose it is a 3x2 matrix read column by column
/// assert_eq!(AccessOrder::ColMajor.offset(2, 1, 3, 2), 5);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessOrder {
    /// Canonical order: rows are contiguous.
    #[default]
    RowMajor,
    /// Swapped order left behind by an odd number of transposes.
    ColMajor,
}

impl AccessOrder {
    /// Maps a logical `(row, col)` position to an offset in the flat buffer.
    ///
    /// `rows` and `cols` are the current logical dimensions. No bounds are
    /// checked here.
    #[inline]
    pub fn offset(self, row: usize, col: usize, rows: usize, cols: usize) -> usize {
        match self {
            AccessOrder::RowMajor => row * cols + col,
            AccessOrder::ColMajor => col * rows + row,
        }
    }

    /// Returns the other order.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            AccessOrder::RowMajor => AccessOrder::ColMajor,
            AccessOrder::ColMajor => AccessOrder::RowMajor,
        }
    }

    /// Strides `[row_stride, col_stride]` of this order for a `rows x cols` matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use mxl::AccessOrder;
    ///
    /// assert_eq!(AccessOrder::RowMajor.strides(2, 3), [3, 1]);
    /// assert_eq!(AccessOrder::ColMajor.strides(3, 2), [1, 3]);
    /// ```
    pub fn strides(self, rows: usize, cols: usize) -> [usize; 2] {
        match self {
            AccessOrder::RowMajor => [cols, 1],
            AccessOrder::ColMajor => [1, rows],
        }
    }
}
