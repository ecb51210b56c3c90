//! Linear-space sweep of the affine recurrence.
//!
//! Only one column of cells is kept. Column `j - 1` is overwritten in place by column `j`: the
//! `current` of the cell above holds H(i - 1, j - 1) until it is replaced, so the diagonal
//! predecessor is carried in a register together with the vertical gap score.

use crate::gap_model::GapCostable;
use crate::matrix::{DpCell, DpVector};
use crate::score::Score;
use crate::score_model::Scoreable;
use crate::tracker::Trackable;

/// Replaces column `j - 1` with column `j`.
///
/// `top` is the row 0 border cell of column `j`, `outer` the outer symbol of column `j` and
/// `inner` the inner symbols of rows `1..=inner.len()`.
#[inline(always)]
pub fn compute_column<S, M, G, T>(
    model: &M,
    gap: &G,
    outer: M::Outer,
    inner: &[M::Inner],
    top: DpCell<S>,
    column: &mut DpVector<S>,
    tracker: &mut T,
) where
    S: Score,
    M: Scoreable<S>,
    G: GapCostable<S>,
    T: Trackable<S>,
{
    debug_assert_eq!(column.len(), inner.len() + 1);

    let mut diagonal = column[0].current;
    let mut up = top.up;
    column[0] = top;

    for (cell, &symbol) in column.iter_mut().skip(1).zip(inner) {
        let mut entry = DpCell {
            current: cell.current,
            diagonal,
            up,
            left: cell.left,
        };
        gap.compute_cell(&mut entry, model.score_diagonal(diagonal, outer, symbol));
        tracker.track(entry.current);

        diagonal = entry.diagonal;
        up = entry.up;
        *cell = entry;
    }
}

/// Sweeps all columns, column-major: outer symbols select the column, inner symbols the row.
///
/// `column` holds the column 0 border on entry and the last column on return, `row` holds the
/// row 0 border with one cell per column. Every finished column, including the border, is handed
/// to the tracker.
pub fn sweep<S, M, G, T>(
    model: &M,
    gap: &G,
    outer: &[M::Outer],
    inner: &[M::Inner],
    column: &mut DpVector<S>,
    row: &DpVector<S>,
    tracker: &mut T,
) where
    S: Score,
    M: Scoreable<S>,
    G: GapCostable<S>,
    T: Trackable<S>,
{
    debug_assert_eq!(row.len(), outer.len() + 1);

    tracker.track_column(0, column);
    for (j, &symbol) in outer.iter().enumerate() {
        compute_column(model, gap, symbol, inner, row[j + 1], column, tracker);
        tracker.track_column(j + 1, column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gap_model::AffineGapModel;
    use crate::matrix::InitRule;
    use crate::score_model::UnitaryScoreModel;

    /// Records the `current` scores of every finished column
    #[derive(Default)]
    struct Columns(Vec<Vec<i32>>);

    impl Trackable<i32> for Columns {
        type Output = Vec<Vec<i32>>;

        fn track_column(&mut self, _index: usize, column: &DpVector<i32>) {
            self.0.push(column.iter().map(|cell| cell.current).collect());
        }

        fn max_score(&self) -> Self::Output {
            self.0.clone()
        }
    }

    fn columns(seq1: &[u8], seq2: &[u8]) -> Vec<Vec<i32>> {
        let model = UnitaryScoreModel::new(4, -5);
        let gap = AffineGapModel::new(-10, -1);
        let mut column = DpVector::new(seq2.len(), InitRule::Regular, &gap);
        let row = DpVector::new(seq1.len(), InitRule::Regular, &gap);
        let mut tracker = Columns::default();
        sweep(
            &model,
            &gap,
            &model.encode(seq1),
            &model.encode(seq2),
            &mut column,
            &row,
            &mut tracker,
        );
        tracker.max_score()
    }

    #[test]
    fn test_single_column() {
        assert_eq!(columns(b"A", b"AC"), vec![vec![0, -11, -12], vec![-11, 4, -7]]);
    }

    #[test]
    fn test_gap_in_inner_sequence() {
        // AAC against A-C: two matches and a gap of one, -10 - 1
        let columns = columns(b"AAC", b"AC");
        assert_eq!(columns.len(), 4);
        assert_eq!(columns[3][2], -3);
    }

    #[test]
    fn test_empty_inner_sequence() {
        assert_eq!(columns(b"AC", b""), vec![vec![0], vec![-11], vec![-12]]);
    }
}
