//! Fixed-width lane vectors. [`Lanes`] holds one scalar per lane and auto-vectorizes on every
//! target; the lane count used for a batch is chosen at runtime from the vector width the CPU
//! reports, so the same binary packs 16 lanes of `i8` on SSE and 32 on AVX2.

mod lanes;

pub use lanes::Lanes;

use crate::score::{Score, ScoreScalar};

/// Lane counts a batch may be compiled for
pub const SUPPORTED_LANE_COUNTS: [usize; 6] = [2, 4, 8, 16, 32, 64];

/// Operations the batched recurrence and score models need on top of [`Score`].
///
/// Masks are vectors of the same type with all bits set (`-1`) in the selected lanes and `0`
/// elsewhere.
pub trait LaneVector: Score {
    fn from_fn(f: impl FnMut(usize) -> Self::Scalar) -> Self;

    /// Lanes where `self == other`
    fn eq_mask(self, other: Self) -> Self;
    /// Lanes where `self < other`
    fn lt_mask(self, other: Self) -> Self;
    fn or(self, other: Self) -> Self;

    /// Uses a mask to blend the values of `self` and `other` where `0` means `self` and `-1`
    /// means `other`
    fn blend(self, other: Self, mask: Self) -> Self;

    /// Get the maximum value in the vector as a scalar
    fn horizontal_max(self) -> Self::Scalar;
    fn to_array(self) -> Vec<Self::Scalar>;
}

/// Width of the widest integer vector register the CPU supports, in bytes.
pub fn vector_bytes() -> usize {
    #[cfg(target_arch = "x86_64")]
    {
        let cpu = raw_cpuid::CpuId::new();
        if let Some(features) = cpu.get_extended_feature_info() {
            if features.has_avx512bw() {
                return 64;
            }
            if features.has_avx2() {
                return 32;
            }
        }
    }
    16
}

/// Number of `T` lanes that fit into one vector register on this CPU.
pub fn lane_width<T: ScoreScalar>() -> usize {
    let lanes = (vector_bytes() / T::BYTES).clamp(2, 64);
    log::debug!(
        "detected {} byte vectors, using {} lanes of {} byte scores",
        vector_bytes(),
        lanes,
        T::BYTES
    );
    lanes
}

/// Expands `$body` with `$n` bound to a `const usize` equal to `$lanes`, so runtime lane counts
/// can select a monomorphized `Lanes<T, N>`.
macro_rules! with_lane_count {
    ($lanes:expr, $n:ident => $body:expr) => {
        match $lanes {
            2 => {
                const $n: usize = 2;
                $body
            }
            4 => {
                const $n: usize = 4;
                $body
            }
            8 => {
                const $n: usize = 8;
                $body
            }
            16 => {
                const $n: usize = 16;
                $body
            }
            32 => {
                const $n: usize = 32;
                $body
            }
            64 => {
                const $n: usize = 64;
                $body
            }
            other => unreachable!("lane count {other} was not validated"),
        }
    };
}

pub(crate) use with_lane_count;
