//! Trackers extract the optimal score while the sweep runs.
//!
//! Global trackers only look at finished columns, local trackers look at every cell. All of them
//! see the column 0 border, so alignments of empty sequences need no special casing.

mod global;
mod lanes;
mod local;
mod saturated;

pub use global::GlobalTracker;
pub use lanes::LaneGlobalTracker;
pub use local::LocalTracker;
pub use saturated::SaturatedLocalTracker;

use crate::matrix::DpVector;

pub trait Trackable<S> {
    type Output;

    /// Called with the `current` score of every computed cell
    #[inline(always)]
    fn track(&mut self, _score: S) {}

    /// Called once per finished column, starting with the border column at index 0
    fn track_column(&mut self, index: usize, column: &DpVector<S>);

    fn max_score(&self) -> Self::Output;
}
