use super::Trackable;
use crate::matrix::DpVector;
use crate::score::Score;

/// Score of the last cell, or the best cell of the last row and/or column when the trailing gaps
/// of the outer (row) and/or inner (column) sequence are free
#[derive(Debug, Clone)]
pub struct GlobalTracker<S> {
    columns: usize,
    free_last_row: bool,
    free_last_column: bool,
    best: S,
    last: S,
}

impl<S: Score> GlobalTracker<S> {
    /// `columns` is the length of the outer sequence
    pub fn new(columns: usize, free_last_row: bool, free_last_column: bool) -> Self {
        Self {
            columns,
            free_last_row,
            free_last_column,
            best: S::lowest(),
            last: S::lowest(),
        }
    }
}

impl<S: Score> Trackable<S> for GlobalTracker<S> {
    type Output = S;

    fn track_column(&mut self, index: usize, column: &DpVector<S>) {
        let last_row = column.last().current;
        if self.free_last_row {
            self.best = self.best.max_with(last_row);
        }
        if index == self.columns {
            self.last = last_row;
            if self.free_last_column {
                self.best = self.best.max_with(column.max_current());
            }
        }
    }

    fn max_score(&self) -> S {
        self.best.max_with(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::DpCell;

    fn column(scores: &[i32]) -> DpVector<i32> {
        DpVector::from_cells(scores.iter().map(|&s| DpCell::border(s, s)).collect())
    }

    #[test]
    fn test_reads_last_cell() {
        let mut tracker = GlobalTracker::new(1, false, false);
        tracker.track_column(0, &column(&[0, 10, -1]));
        tracker.track_column(1, &column(&[-10, 20, -3]));
        assert_eq!(tracker.max_score(), -3);
    }

    #[test]
    fn test_free_last_row() {
        let mut tracker = GlobalTracker::new(2, true, false);
        tracker.track_column(0, &column(&[0, -1]));
        tracker.track_column(1, &column(&[0, 7]));
        tracker.track_column(2, &column(&[0, 3]));
        assert_eq!(tracker.max_score(), 7);
    }

    #[test]
    fn test_free_last_column() {
        let mut tracker = GlobalTracker::new(1, false, true);
        tracker.track_column(0, &column(&[0, 50, -1]));
        tracker.track_column(1, &column(&[-10, 20, -3]));
        assert_eq!(tracker.max_score(), 20);
    }
}
