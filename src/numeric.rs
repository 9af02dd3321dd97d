//! The numeric capability used by the statistical operations.
//!
//! [`Numeric`] abstracts over the primitive integer and floating point types
//! so that `avg` and `median` are written once instead of once per type.
//! Division follows the type's own semantics: integer division truncates
//! toward zero, floating point division does not.
//!
//! The element count is converted with a checked conversion and sums are
//! accumulated with checked addition, so narrow integer types report a
//! failure instead of wrapping.
//!
//! # Examples
//!
//! ```rust
//! use ordo::Numeric;
//!
//! assert_eq!(i32::zero(), 0);
//! assert_eq!(7_i32.divide(2), Some(3));
//! assert_eq!(0_u8.divide(256), None);
//! assert_eq!(Numeric::midpoint(i32::MAX, i32::MAX), Some(i32::MAX));
//! ```

use std::fmt::Debug;
use std::ops::{Add, Div};

/// Types that can be summed and divided by an element count.
///
/// # Laws
///
/// - `zero()` is the additive identity: `zero() + value == value`
/// - `from_count(1)` is the multiplicative identity for `Div`
/// - `from_count(count)` is `None` whenever `count` is not representable
///
/// # Implementing Numeric
///
/// ```rust
/// use ordo::Numeric;
/// use std::ops::{Add, Div};
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Meters(f64);
///
/// impl Add for Meters {
///     type Output = Self;
///     fn add(self, other: Self) -> Self { Self(self.0 + other.0) }
/// }
///
/// impl Div for Meters {
///     type Output = Self;
///     fn div(self, other: Self) -> Self { Self(self.0 / other.0) }
/// }
///
/// impl Numeric for Meters {
///     fn zero() -> Self { Self(0.0) }
///     #[allow(clippy::cast_precision_loss)]
///     fn from_count(count: usize) -> Option<Self> { Some(Self(count as f64)) }
/// }
///
/// assert_eq!(Meters(3.0).divide(2), Some(Meters(1.5)));
/// assert_eq!(Meters(1.0).midpoint(Meters(2.0)), Some(Meters(1.5)));
/// ```
pub trait Numeric:
    Copy + PartialEq + PartialOrd + Debug + Add<Output = Self> + Div<Output = Self>
{
    /// Returns the additive identity.
    fn zero() -> Self;

    /// Converts an element count into this numeric type.
    ///
    /// Returns `None` when the count does not fit the type.
    fn from_count(count: usize) -> Option<Self>;

    /// Adds `other` to `self`, returning `None` on overflow.
    #[inline]
    fn checked_add(self, other: Self) -> Option<Self> {
        Some(self + other)
    }

    /// Divides `self` by an element count.
    ///
    /// Returns `None` when the count is zero or does not fit the type.
    #[inline]
    fn divide(self, count: usize) -> Option<Self> {
        Self::from_count(count)
            .filter(|divisor| *divisor > Self::zero())
            .map(|divisor| self / divisor)
    }

    /// Returns the mean of `self` and `other`.
    ///
    /// Integer results truncate toward zero. The primitive types never
    /// return `None`.
    #[inline]
    fn midpoint(self, other: Self) -> Option<Self> {
        self.checked_add(other).and_then(|sum| sum.divide(2))
    }
}

macro_rules! impl_numeric_integer {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Numeric for $numeric {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn from_count(count: usize) -> Option<Self> {
                    Self::try_from(count).ok()
                }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$numeric>::checked_add(self, other)
                }

                #[inline]
                fn midpoint(self, other: Self) -> Option<Self> {
                    Some(<$numeric>::midpoint(self, other))
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Numeric for $numeric {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
                fn from_count(count: usize) -> Option<Self> {
                    Some(count as $numeric)
                }

                #[inline]
                fn midpoint(self, other: Self) -> Option<Self> {
                    Some(<$numeric>::midpoint(self, other))
                }
            }
        )*
    };
}

impl_numeric_integer!(i8, i16, i32, i64, i128, isize);
impl_numeric_integer!(u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);
