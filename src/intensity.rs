// MIT/Apache2 License

use num_traits::{AsPrimitive, Bounded};
use ordered_float::NotNan;

/// A range that goes from zero to one, used for the coverage of an antialiased pixel and for blend weights
/// while compositing. This type is essentially a wrapper around an `f32`, but with two invariants:
///
/// * The inner value will always be between `0.0` and `1.0`.
/// * The inner value will never be `NaN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Intensity {
    inner: NotNan<f32>,
}

impl Intensity {
    /// Create a new `Intensity`, without checking the inner value.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if `inner` is not a number, or outside of the range [0, 1].
    #[inline]
    pub unsafe fn new_unchecked(inner: f32) -> Self {
        Self {
            inner: NotNan::new_unchecked(inner),
        }
    }

    /// Create a new `Intensity`. If the inner value does not meet the invariants mentioned above, this function
    /// returns `None`.
    #[inline]
    pub fn new(inner: f32) -> Option<Self> {
        if (0.0..=1.0).contains(&inner) {
            NotNan::new(inner).ok().map(|inner| Self { inner })
        } else {
            None
        }
    }

    /// Create a new `Intensity` by clamping the value into [0, 1]. `NaN` becomes zero.
    #[inline]
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            Self::zero()
        } else {
            // SAFETY: the value is a number, and clamping keeps it in range
            unsafe { Self::new_unchecked(value.max(0.0).min(1.0)) }
        }
    }

    /// No intensity at all.
    #[inline]
    pub fn zero() -> Self {
        // SAFETY: zero is in range
        unsafe { Self::new_unchecked(0.0) }
    }

    /// Full intensity.
    #[inline]
    pub fn one() -> Self {
        // SAFETY: one is in range
        unsafe { Self::new_unchecked(1.0) }
    }

    /// Get the inner value of the `Intensity`.
    #[inline]
    pub fn into_inner(self) -> f32 {
        self.inner.into_inner()
    }

    /// The complement of this intensity, `1 - self`.
    #[inline]
    pub fn complement(self) -> Self {
        Self::clamped(1.0 - self.into_inner())
    }

    /// Multiply two intensities. The product of two values in [0, 1] stays in [0, 1].
    #[inline]
    pub fn scale(self, other: Intensity) -> Self {
        Self::clamped(self.into_inner() * other.into_inner())
    }

    /// Scale this value to a `u8`, truncating.
    #[inline]
    pub fn clamp_to_u8(self) -> u8 {
        clamp(self.into_inner())
    }
}

impl Default for Intensity {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Intensity> for f32 {
    #[inline]
    fn from(i: Intensity) -> f32 {
        i.into_inner()
    }
}

/// Scale a value in [0, 1] to the full range of an integer type.
#[inline]
fn clamp<T>(value: f32) -> T
where
    T: Bounded + AsPrimitive<f32> + Copy + 'static,
    f32: AsPrimitive<T>,
{
    let max: f32 = T::max_value().as_();
    (value * max).as_()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_out_of_range() {
        assert!(Intensity::new(0.5).is_some());
        assert!(Intensity::new(1.0).is_some());
        assert!(Intensity::new(-0.1).is_none());
        assert!(Intensity::new(1.5).is_none());
        assert!(Intensity::new(f32::NAN).is_none());
    }

    #[test]
    fn clamping() {
        assert_abs_diff_eq!(Intensity::clamped(2.0).into_inner(), 1.0);
        assert_abs_diff_eq!(Intensity::clamped(-3.0).into_inner(), 0.0);
        assert_abs_diff_eq!(Intensity::clamped(f32::NAN).into_inner(), 0.0);
        assert_abs_diff_eq!(Intensity::clamped(0.25).complement().into_inner(), 0.75);
    }

    #[test]
    fn to_u8() {
        assert_eq!(Intensity::one().clamp_to_u8(), 255);
        assert_eq!(Intensity::zero().clamp_to_u8(), 0);
        assert_eq!(Intensity::clamped(0.5).clamp_to_u8(), 127);
    }
}
