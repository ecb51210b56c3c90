use super::Trackable;
use crate::matrix::DpVector;
use crate::score::Score;

/// Running maximum over every cell
#[derive(Debug, Clone)]
pub struct LocalTracker<S> {
    best: S,
}

impl<S: Score> LocalTracker<S> {
    pub fn new() -> Self {
        Self { best: S::lowest() }
    }
}

impl<S: Score> Default for LocalTracker<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Score> Trackable<S> for LocalTracker<S> {
    type Output = S;

    #[inline(always)]
    fn track(&mut self, score: S) {
        self.best = self.best.max_with(score);
    }

    fn track_column(&mut self, index: usize, column: &DpVector<S>) {
        // border cells never pass through `track`
        self.best = self.best.max_with(column[0].current);
        if index == 0 {
            self.best = self.best.max_with(column.max_current());
        }
    }

    fn max_score(&self) -> S {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gap_model::AffineGapModel;
    use crate::matrix::InitRule;

    #[test]
    fn test_starts_at_minimum() {
        assert_eq!(LocalTracker::<i16>::new().max_score(), i16::MIN);
    }

    #[test]
    fn test_running_maximum() {
        let mut tracker = LocalTracker::<i32>::new();
        for score in [3, 9, -2, 4] {
            tracker.track(score);
        }
        assert_eq!(tracker.max_score(), 9);
    }

    #[test]
    fn test_border_column_counts() {
        let gap = AffineGapModel::<i32>::new(-10, -1);
        let mut tracker = LocalTracker::new();
        tracker.track_column(0, &DpVector::new(0, InitRule::Zero, &gap));
        assert_eq!(tracker.max_score(), 0);
    }
}
