use super::{LaneScoreModel, Scoreable};
use crate::score::ScoreScalar;
use crate::simd::LaneVector;

/// Precomputed lane scores of every alphabet symbol against every inner position of a batch.
///
/// Used when one outer sequence is aligned against a batch of inner sequences: each column then
/// reads a row of the profile instead of comparing ranks per cell. The profile is built with the
/// lane model itself, so its scores are identical to scoring cell by cell.
#[derive(Debug, Clone)]
pub struct Profile<V> {
    rows: Vec<Vec<V>>,
}

impl<V: LaneVector> Profile<V> {
    pub fn new(model: &LaneScoreModel<V>, alphabet_len: usize, inner: &[V]) -> Self {
        let rows = (0..alphabet_len)
            .map(|rank| {
                let outer = V::splat(V::Scalar::from_i64(rank as i64));
                inner.iter().map(|&b| model.score(outer, b)).collect()
            })
            .collect();
        Self { rows }
    }

    /// Number of inner positions
    pub fn len(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inner symbols to sweep the profile with
    pub fn positions(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }
}

impl<V: LaneVector> Scoreable<V> for Profile<V> {
    /// Rank of the outer symbol
    type Outer = usize;
    /// Inner position
    type Inner = usize;

    #[inline(always)]
    fn score(&self, rank: usize, position: usize) -> V {
        self.rows[rank][position]
    }
}
