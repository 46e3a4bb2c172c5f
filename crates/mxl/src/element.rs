use num_traits::{One, Zero};
use rand::Rng;
use std::ops::{Add, AddAssign, Mul, MulAssign};

/// Upper bound (inclusive) of the random draws for integral element types.
pub const RANDOM_INT_MAX: i32 = 1_000_000;

/// Numeric element types a [`crate::Matrix`] can hold.
///
/// Besides the arithmetic the operators need, an element knows how to draw
/// itself for the `random` initializer: floating point types are uniform on
/// `[0, 1)`, integral types are uniform on `[0, RANDOM_INT_MAX]`.
pub trait Element:
    Copy
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + MulAssign
{
    /// Draw one random value from `rng`.
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_element_float {
    ($($t:ty),+) => {
        $(
            impl Element for $t {
                #[inline]
                fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.random::<$t>()
                }
            }
        )+
    };
}

macro_rules! impl_element_int {
    ($($t:ty),+) => {
        $(
            impl Element for $t {
                #[inline]
                fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.random_range(0..=(RANDOM_INT_MAX as $t))
                }
            }
        )+
    };
}

// rand has no uniform sampler for pointer-sized integers, draw through i64
macro_rules! impl_element_pointer_sized {
    ($($t:ty),+) => {
        $(
            impl Element for $t {
                #[inline]
                fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.random_range(0..=(RANDOM_INT_MAX as i64)) as $t
                }
            }
        )+
    };
}

impl_element_float!(f32, f64);
impl_element_int!(i32, i64, i128, u32, u64, u128);
impl_element_pointer_sized!(isize, usize);
