//! Score types driven through the recurrence. A score is either a plain signed scalar or a
//! [`Lanes`](crate::simd::Lanes) vector of them; the recurrence is written once against
//! [`Score`] and works for both.

use std::fmt::Debug;

/// Signed integer usable as a DP score. All arithmetic through this trait saturates.
pub trait ScoreScalar: Copy + Ord + Debug + Default + Send + Sync + 'static {
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    /// Width of the scalar in bytes, used to derive the lane count for a vector width
    const BYTES: usize;

    /// Converts from `i64`, clamping to the representable range
    fn from_i64(value: i64) -> Self;
    fn to_i64(self) -> i64;

    fn saturating_add(self, other: Self) -> Self;
    fn saturating_sub(self, other: Self) -> Self;
}

/// A value the recurrence operates on: one scalar, or one scalar per lane.
pub trait Score: Copy + Debug + PartialEq + Send + Sync + 'static {
    type Scalar: ScoreScalar;
    const LANES: usize;

    fn splat(value: Self::Scalar) -> Self;
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn max_with(self, other: Self) -> Self;
    fn min_with(self, other: Self) -> Self;
    fn lane(&self, lane: usize) -> Self::Scalar;

    #[inline(always)]
    fn splat_i32(value: i32) -> Self {
        Self::splat(Self::Scalar::from_i64(value as i64))
    }

    #[inline(always)]
    fn lowest() -> Self {
        Self::splat(Self::Scalar::MIN)
    }
}

macro_rules! impl_score_scalar {
    ($($t:ty),*) => {
        $(
            impl ScoreScalar for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;
                const BYTES: usize = std::mem::size_of::<$t>();

                #[inline(always)]
                fn from_i64(value: i64) -> Self {
                    value.clamp(<$t>::MIN as i64, <$t>::MAX as i64) as $t
                }

                #[inline(always)]
                fn to_i64(self) -> i64 {
                    self as i64
                }

                #[inline(always)]
                fn saturating_add(self, other: Self) -> Self {
                    <$t>::saturating_add(self, other)
                }

                #[inline(always)]
                fn saturating_sub(self, other: Self) -> Self {
                    <$t>::saturating_sub(self, other)
                }
            }

            impl Score for $t {
                type Scalar = $t;
                const LANES: usize = 1;

                #[inline(always)]
                fn splat(value: $t) -> Self {
                    value
                }

                #[inline(always)]
                fn add(self, other: Self) -> Self {
                    <$t>::saturating_add(self, other)
                }

                #[inline(always)]
                fn sub(self, other: Self) -> Self {
                    <$t>::saturating_sub(self, other)
                }

                #[inline(always)]
                fn max_with(self, other: Self) -> Self {
                    Ord::max(self, other)
                }

                #[inline(always)]
                fn min_with(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                #[inline(always)]
                fn lane(&self, lane: usize) -> $t {
                    debug_assert_eq!(lane, 0, "scalar scores have a single lane");
                    *self
                }
            }
        )*
    };
}

impl_score_scalar!(i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_i64_clamps() {
        assert_eq!(i8::from_i64(300), i8::MAX);
        assert_eq!(i8::from_i64(-300), i8::MIN);
        assert_eq!(i16::from_i64(-12), -12);
    }

    #[test]
    fn test_scalar_add_saturates() {
        assert_eq!(Score::add(120i8, 20), i8::MAX);
        assert_eq!(Score::add(i32::MIN, -1), i32::MIN);
        assert_eq!(Score::add(4i32, -5), -1);
    }
}
