use super::Trackable;
use crate::interleave::InterleavedBatch;
use crate::matrix::DpVector;
use crate::score::{Score, ScoreScalar};
use crate::simd::LaneVector;

/// Global scores of a ragged batch.
///
/// Each lane finishes at the column of its own outer length and is read from the last row, where
/// its front padded inner sequence ends. The padding score collected on the way is subtracted
/// afterwards.
///
/// Global lanes are never rebiased. Saturating arithmetic pins an out of range score to the
/// limit of the scalar type, so a lane is reported as saturated as soon as any score of its own
/// columns, borders included, sits at `MIN` or `MAX`. Every score derived from an exact
/// predecessor is exact unless it is pinned, so lanes that never hit a limit are exact.
#[derive(Debug, Clone)]
pub struct LaneGlobalTracker<V> {
    columns: Vec<usize>,
    offsets: Vec<i64>,
    valid: Vec<bool>,
    free_last_row: bool,
    free_last_column: bool,
    best: Vec<i64>,
    last: Vec<i64>,
    hits: V,
    saturated: Option<usize>,
}

impl<V: LaneVector> LaneGlobalTracker<V> {
    pub fn new(
        batch: &InterleavedBatch<V>,
        padding: i64,
        free_last_row: bool,
        free_last_column: bool,
    ) -> Self {
        let lanes = batch.lanes();
        Self {
            columns: (0..lanes).map(|k| batch.outer_length(k)).collect(),
            offsets: (0..lanes).map(|k| padding * batch.offset(k) as i64).collect(),
            valid: (0..lanes).map(|k| batch.is_valid(k)).collect(),
            free_last_row,
            free_last_column,
            best: vec![i64::MIN; lanes],
            last: vec![i64::MIN; lanes],
            hits: V::splat(V::Scalar::ZERO),
            saturated: None,
        }
    }

    /// First lane whose score reached the limits of the scalar type
    pub fn saturated_lane(&self) -> Option<usize> {
        self.saturated
    }

    /// Flags the first lane that hit a limit within its own columns, then clears the hits
    fn flag_saturated(&mut self, index: usize) {
        if self.saturated.is_none() {
            self.saturated = (0..V::LANES).find(|&lane| {
                self.valid[lane]
                    && index <= self.columns[lane]
                    && self.hits.lane(lane) != V::Scalar::ZERO
            });
        }
        self.hits = V::splat(V::Scalar::ZERO);
    }
}

impl<V: LaneVector> Trackable<V> for LaneGlobalTracker<V> {
    type Output = Vec<Option<i64>>;

    #[inline(always)]
    fn track(&mut self, score: V) {
        let pinned = score
            .eq_mask(V::splat(V::Scalar::MIN))
            .or(score.eq_mask(V::splat(V::Scalar::MAX)));
        self.hits = self.hits.or(pinned);
    }

    fn track_column(&mut self, index: usize, column: &DpVector<V>) {
        // the row 0 border of every column, and the whole column 0 border
        if index == 0 {
            column.iter().for_each(|cell| self.track(cell.current));
        } else {
            self.track(column[0].current);
        }
        self.flag_saturated(index);

        let last_row = column.last().current;
        let column_max = (self.free_last_column && self.columns.contains(&index))
            .then(|| column.max_current());

        for lane in 0..V::LANES {
            if !self.valid[lane] || index > self.columns[lane] {
                continue;
            }
            if self.free_last_row {
                self.best[lane] = self.best[lane].max(last_row.lane(lane).to_i64());
            }
            if index == self.columns[lane] {
                self.last[lane] = last_row.lane(lane).to_i64();
                if let Some(column_max) = column_max {
                    self.best[lane] = self.best[lane].max(column_max.lane(lane).to_i64());
                }
            }
        }
    }

    fn max_score(&self) -> Vec<Option<i64>> {
        (0..V::LANES)
            .map(|lane| {
                self.valid[lane]
                    .then(|| self.best[lane].max(self.last[lane]) - self.offsets[lane])
            })
            .collect()
    }
}
