use super::Trackable;
use crate::matrix::DpVector;
use crate::score::{Score, ScoreScalar};
use crate::simd::LaneVector;

/// Local maximum of narrow lanes that may outgrow their scalar type.
///
/// Scores are tracked into a block maximum of the lane type. Before the block maximum can
/// saturate, the caller folds it into a wide accumulator with [`fold_block`] and lowers all
/// stored scores together with the local floor. Scores are always read relative to the floor,
/// so lowering both keeps them intact.
///
/// [`fold_block`]: SaturatedLocalTracker::fold_block
#[derive(Debug, Clone)]
pub struct SaturatedLocalTracker<V> {
    block_max: V,
    zero: V,
    wide: Vec<i64>,
}

impl<V: LaneVector> SaturatedLocalTracker<V> {
    pub fn new() -> Self {
        Self {
            block_max: V::lowest(),
            zero: V::splat(V::Scalar::ZERO),
            wide: vec![i64::MIN; V::LANES],
        }
    }

    pub fn block_max(&self) -> V {
        self.block_max
    }

    /// Current local floor
    pub fn zero(&self) -> V {
        self.zero
    }

    pub fn is_saturated(&self) -> bool {
        self.block_max.horizontal_max() == V::Scalar::MAX
    }

    /// Whether any lane of the block maximum exceeds `limit`
    pub fn exceeds(&self, limit: V::Scalar) -> bool {
        self.block_max.horizontal_max() > limit
    }

    /// Folds the block maximum into the wide accumulator and starts a new block
    pub fn fold_block(&mut self) {
        for lane in 0..V::LANES {
            let block_max = self.block_max.lane(lane);
            if block_max != V::Scalar::MIN {
                let relative = block_max.to_i64() - self.zero.lane(lane).to_i64();
                self.wide[lane] = self.wide[lane].max(relative);
            }
        }
        self.block_max = V::lowest();
    }

    /// Largest shift per lane that maps the block maximum onto the floor without moving the floor
    /// below the smallest score
    pub fn rebias_amount(&self) -> V {
        V::from_fn(|lane| {
            let zero = self.zero.lane(lane).to_i64();
            let headroom = zero - V::Scalar::MIN.to_i64();
            let gained = self.block_max.lane(lane).to_i64() - zero;
            V::Scalar::from_i64(headroom.min(gained).max(0))
        })
    }

    /// Lowers the floor by `bias`, callers lower every stored score by the same amount
    pub fn rebias(&mut self, bias: V) {
        self.zero = self.zero.sub(bias);
        self.block_max = self.block_max.sub(bias);
    }
}

impl<V: LaneVector> Default for SaturatedLocalTracker<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: LaneVector> Trackable<V> for SaturatedLocalTracker<V> {
    /// Best local score per lane, relative to the floor
    type Output = Vec<i64>;

    #[inline(always)]
    fn track(&mut self, score: V) {
        debug_assert!(
            !self.is_saturated(),
            "block maximum saturated, fold_block must run before scores reach the lane limit"
        );
        self.block_max = self.block_max.max_with(score);
    }

    fn track_column(&mut self, index: usize, column: &DpVector<V>) {
        self.block_max = self.block_max.max_with(column[0].current);
        if index == 0 {
            self.block_max = self.block_max.max_with(column.max_current());
        }
    }

    fn max_score(&self) -> Vec<i64> {
        (0..V::LANES)
            .map(|lane| {
                let block_max = self.block_max.lane(lane).to_i64();
                let block = block_max - self.zero.lane(lane).to_i64();
                if self.block_max.lane(lane) == V::Scalar::MIN {
                    self.wide[lane]
                } else {
                    self.wide[lane].max(block)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::Lanes;

    type V = Lanes<i8, 2>;

    #[test]
    fn test_fold_keeps_wide_maximum() {
        let mut tracker = SaturatedLocalTracker::<V>::new();
        tracker.track(Lanes([100, 5]));
        tracker.fold_block();
        assert_eq!(tracker.block_max(), Lanes::splat(i8::MIN));
        tracker.track(Lanes([3, 20]));
        assert_eq!(tracker.max_score(), vec![100, 20]);
    }

    #[test]
    fn test_rebias_is_relative_to_floor() {
        let mut tracker = SaturatedLocalTracker::<V>::new();
        tracker.track(Lanes([120, 10]));
        let bias = tracker.rebias_amount();
        assert_eq!(bias, Lanes([120, 10]));

        tracker.fold_block();
        tracker.rebias(bias);
        assert_eq!(tracker.zero(), Lanes([-120, -10]));

        // a further gain of 100 on top of the rebiased maximum
        tracker.track(Lanes([-20, 90]));
        assert_eq!(tracker.max_score(), vec![120, 100]);
    }

    #[test]
    fn test_exceeds_any_lane() {
        let mut tracker = SaturatedLocalTracker::<V>::new();
        tracker.track(Lanes([10, 122]));
        assert!(tracker.exceeds(121));
        assert!(!tracker.exceeds(122));
        assert!(!tracker.is_saturated());
        tracker.track(Lanes([i8::MAX, 0]));
        assert!(tracker.is_saturated());
    }

    #[test]
    fn test_rebias_keeps_floor_representable() {
        let mut tracker = SaturatedLocalTracker::<V>::new();
        tracker.rebias(Lanes([100, 0]));
        tracker.track(Lanes([120, 0]));
        assert_eq!(tracker.rebias_amount(), Lanes([28, 0]));
    }

    #[test]
    #[should_panic(expected = "block maximum saturated")]
    #[cfg(debug_assertions)]
    fn test_tracking_into_saturated_block() {
        let mut tracker = SaturatedLocalTracker::<V>::new();
        tracker.track(Lanes([i8::MAX, 0]));
        tracker.track(Lanes([0, 0]));
    }
}
