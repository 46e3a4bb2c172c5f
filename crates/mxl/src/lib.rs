#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `mxl` provides [`Matrix`], a dense matrix over a numeric element type that
//! owns a single flat buffer. Transposing is constant time: instead of moving
//! data, the matrix swaps its dimensions and flips the [`AccessOrder`] used to
//! map `(row, col)` to a buffer offset.
//!
//! # Quick Start
//!
//! ```rust
//! use mxl::{matrix, Matrix};
//!
//! let a = matrix![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
//! let b = a.transpose_copy();
//!
//! // operators panic on incompatible shapes, `try_*` methods return errors
//! let c = &(&a * &b) + &a;
//! assert_eq!(c.shape(), (3, 3));
//! assert!(a.try_mul(&Matrix::zeros(2, 2)).is_err());
//!
//! let mut d = c.clone();
//! d *= 2;
//! d.transpose();
//! assert_eq!(d[(0, 1)], 2 * c[(1, 0)]);
//! ```
//!
//! Named initializers:
//!
//! ```rust
//! use mxl::{Initializer, Matrix};
//!
//! let eye = Matrix::<f64>::from_initializer(3, 3, Initializer::Identity);
//! let rnd = Matrix::<f64>::from_initializer_name(3, 3, "random").unwrap();
//! assert_eq!(&rnd * &eye, rnd);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Matrix`].
//! - `bincode`: `Encode`/`Decode` for [`Matrix`].

/// bincode encoding and decoding, behind the `bincode` feature.
#[cfg(feature = "bincode")]
pub mod bincode;

/// Text rendering of matrices.
pub mod display;

/// Element trait and random draws.
pub mod element;

/// Error types for matrix operations.
pub mod error;

/// Named initializers.
pub mod init;

/// Access orders and the `(row, col)` to offset mapping.
pub mod layout;

/// The matrix type: construction, access and transpose.
pub mod matrix;

/// Matrix arithmetic and operator overloads.
pub mod ops;

/// serde support, behind the `serde` feature.
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::element::Element;
pub use crate::error::MatrixError;
pub use crate::init::Initializer;
pub use crate::layout::AccessOrder;
pub use crate::matrix::Matrix;

/// Builds a [`Matrix`] from a nested literal, one bracketed row per matrix row.
///
/// All rows must have the same length; this is checked at compile time.
///
/// # Example
///
/// ```
/// use mxl::matrix;
///
/// let m = matrix![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[macro_export]
macro_rules! matrix {
    () => {
        $crate::Matrix::new()
    };
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Matrix::from([$([$($x),*]),+])
    };
}
