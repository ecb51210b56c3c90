use std::array;

use super::LaneVector;
use crate::score::{Score, ScoreScalar};

/// One score per lane. Aligned to 64 bytes so a vector load never straddles cache lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(64))]
pub struct Lanes<T, const N: usize>(pub [T; N]);

impl<T: ScoreScalar, const N: usize> Score for Lanes<T, N> {
    type Scalar = T;
    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self(array::from_fn(|k| self.0[k].saturating_add(other.0[k])))
    }

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self(array::from_fn(|k| self.0[k].saturating_sub(other.0[k])))
    }

    #[inline(always)]
    fn max_with(self, other: Self) -> Self {
        Self(array::from_fn(|k| self.0[k].max(other.0[k])))
    }

    #[inline(always)]
    fn min_with(self, other: Self) -> Self {
        Self(array::from_fn(|k| self.0[k].min(other.0[k])))
    }

    #[inline(always)]
    fn lane(&self, lane: usize) -> T {
        self.0[lane]
    }
}

impl<T: ScoreScalar, const N: usize> LaneVector for Lanes<T, N> {
    #[inline(always)]
    fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(array::from_fn(f))
    }

    #[inline(always)]
    fn eq_mask(self, other: Self) -> Self {
        Self(array::from_fn(|k| mask(self.0[k] == other.0[k])))
    }

    #[inline(always)]
    fn lt_mask(self, other: Self) -> Self {
        Self(array::from_fn(|k| mask(self.0[k] < other.0[k])))
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        Self(array::from_fn(|k| mask(self.0[k] != T::ZERO || other.0[k] != T::ZERO)))
    }

    #[inline(always)]
    fn blend(self, other: Self, mask: Self) -> Self {
        Self(array::from_fn(|k| {
            if mask.0[k] == T::ZERO {
                self.0[k]
            } else {
                other.0[k]
            }
        }))
    }

    #[inline(always)]
    fn horizontal_max(self) -> T {
        self.0.into_iter().max().unwrap_or(T::MIN)
    }

    fn to_array(self) -> Vec<T> {
        self.0.to_vec()
    }
}

#[inline(always)]
fn mask<T: ScoreScalar>(selected: bool) -> T {
    if selected { T::from_i64(-1) } else { T::ZERO }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_saturates_per_lane() {
        let a = Lanes::<i8, 4>([100, -100, 5, 0]);
        let b = Lanes::<i8, 4>([100, -100, -5, 1]);
        assert_eq!(a.add(b), Lanes([i8::MAX, i8::MIN, 0, 1]));
    }

    #[test]
    fn test_blend_by_eq_mask() {
        let a = Lanes::<i16, 4>([1, 2, 3, 4]);
        let b = Lanes::<i16, 4>([1, 0, 3, 0]);
        let matched = Lanes::splat(4);
        let mismatched = Lanes::splat(-5);
        assert_eq!(
            mismatched.blend(matched, a.eq_mask(b)),
            Lanes([4, -5, 4, -5])
        );
    }

    #[test]
    fn test_lt_and_or_masks() {
        let a = Lanes::<i32, 4>([-1, 0, 2, -2]);
        let zero = Lanes::splat(0);
        assert_eq!(a.lt_mask(zero), Lanes([-1, 0, 0, -1]));
        assert_eq!(
            a.lt_mask(zero).or(Lanes([0, -1, 0, 0])),
            Lanes([-1, -1, 0, -1])
        );
    }

    #[test]
    fn test_horizontal_max() {
        assert_eq!(Lanes::<i8, 8>([1, -3, 7, 2, 0, 0, 6, -128]).horizontal_max(), 7);
    }
}
