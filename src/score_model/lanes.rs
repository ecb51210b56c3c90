use std::sync::Arc;

use super::{ScoreModel, Scoreable};
use crate::score::{Score, ScoreScalar};
use crate::simd::LaneVector;

/// Rank appended to outer sequences shorter than the longest one in a batch
pub const PAD_OUTER: i16 = -1;
/// Rank prepended to inner sequences shorter than the longest one in a batch
pub const PAD_INNER: i16 = -2;

#[derive(Debug, Clone)]
enum Substitution<V: LaneVector> {
    Unitary { matched: V, mismatched: V },
    Matrix { scores: Arc<[V::Scalar]>, size: usize },
}

/// Scores one lane vector of ranks against another.
///
/// Padding ranks are negative and never equal to a real rank. Lanes where the inner rank is
/// padding score `inner_pad`, lanes where the outer rank is padding score `outer_pad`.
#[derive(Debug, Clone)]
pub struct LaneScoreModel<V: LaneVector> {
    substitution: Substitution<V>,
    inner_pad: V,
    outer_pad: V,
}

impl<V: LaneVector> LaneScoreModel<V> {
    pub fn new(model: &ScoreModel, inner_pad: V::Scalar, outer_pad: V::Scalar) -> Self {
        let substitution = match model {
            ScoreModel::Unitary(model) => Substitution::Unitary {
                matched: V::splat_i32(model.match_score()),
                mismatched: V::splat_i32(model.mismatch_score()),
            },
            ScoreModel::Matrix(model) => Substitution::Matrix {
                scores: model
                    .scores()
                    .iter()
                    .map(|&score| V::Scalar::from_i64(score as i64))
                    .collect(),
                size: model.size(),
            },
        };

        Self {
            substitution,
            inner_pad: V::splat(inner_pad),
            outer_pad: V::splat(outer_pad),
        }
    }
}

impl<V: LaneVector> Scoreable<V> for LaneScoreModel<V> {
    type Outer = V;
    type Inner = V;

    #[inline(always)]
    fn score(&self, outer: V, inner: V) -> V {
        let substituted = match &self.substitution {
            Substitution::Unitary {
                matched,
                mismatched,
            } => mismatched.blend(*matched, outer.eq_mask(inner)),
            Substitution::Matrix { scores, size } => V::from_fn(|k| {
                let (a, b) = (outer.lane(k).to_i64(), inner.lane(k).to_i64());
                if a < 0 || b < 0 {
                    V::Scalar::ZERO
                } else {
                    scores[a as usize * size + b as usize]
                }
            }),
        };

        let zero = V::splat(V::Scalar::ZERO);
        substituted
            .blend(self.inner_pad, inner.lt_mask(zero))
            .blend(self.outer_pad, outer.lt_mask(zero))
    }
}
