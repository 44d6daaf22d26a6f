//! Numeric element trait for matrix entries.

use std::fmt;
use std::ops::Neg;

use num_traits::Num;

/// Trait for types that can be entries of a [`SquareMatrix`](crate::SquareMatrix).
///
/// # Bounds
/// - `Copy + Debug + PartialEq` - entries are plain values
/// - `Num` - ring arithmetic plus `zero()` and `one()`
/// - `Neg` - cofactor signs are applied by negation
///
/// Implemented for every type satisfying the bounds (`f64`, `f32`, `i32`,
/// `i64`, `i128`, ...). Integer types give exact results; floating types are
/// subject to rounding since no pivoting is performed.
pub trait Scalar: Copy + fmt::Debug + PartialEq + Num + Neg<Output = Self> {
    /// Apply the checkerboard sign `(-1)^(row + col)`.
    #[inline]
    #[must_use]
    fn signed(self, row: usize, col: usize) -> Self {
        if (row + col) % 2 == 0 { self } else { -self }
    }
}

impl<T> Scalar for T where T: Copy + fmt::Debug + PartialEq + Num + Neg<Output = T> {}
