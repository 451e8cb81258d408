//! Numeric representation used by attribute objects.
//!
//! Rule sets pick the number type their attributes are stored in. Integer
//! rule sets (`i64`, the default everywhere) are the common case; floating
//! point works the same way for rule sets that want fractional stats.

use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, Div, Sub};

/// Number type an [`Object`](super::Object) stores and derives.
///
/// `Default` is the value returned for unknown keys and doubles as zero.
pub trait Value:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + Sum
    + Send
    + Sync
    + 'static
{
    /// Converts an integer literal (counts, rewards, constants).
    fn from_i64(value: i64) -> Self;

    /// Additive identity.
    fn zero() -> Self {
        Self::default()
    }

    /// Multiplicative identity.
    fn one() -> Self {
        Self::from_i64(1)
    }

    /// Clamps into `[min, max]`. When `max < min` the lower bound wins.
    fn clamp_between(self, min: Self, max: Self) -> Self {
        let upper = if self > max { max } else { self };
        if upper < min { min } else { upper }
    }

    /// Larger of two values.
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

macro_rules! impl_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Value for $ty {
                #[inline]
                fn from_i64(value: i64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_value!(i32, i64, f32, f64);
