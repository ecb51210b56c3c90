use super::GapCostable;
use crate::error::{Error, Result};
use crate::matrix::DpCell;
use crate::r#const::{GAP_EXTENSION_SCORE, GAP_OPEN_SCORE};
use crate::score::{Score, ScoreScalar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineGapModel<S> {
    open: S,
    extension: S,
    open_extension: S,
    open_score: i32,
    extension_score: i32,
}

impl<S: Score> AffineGapModel<S> {
    pub fn new(open: i32, extension: i32) -> Self {
        Self {
            open: S::splat_i32(open),
            extension: S::splat_i32(extension),
            open_extension: S::splat_i32(open.saturating_add(extension)),
            open_score: open,
            extension_score: extension,
        }
    }

    /// Like [`AffineGapModel::new`] but rejects positive scores, which would make gaps more
    /// attractive than no gap at all
    pub fn try_new(open: i32, extension: i32) -> Result<Self> {
        if open > 0 || extension > 0 {
            return Err(Error::InvalidGapModel { open, extension });
        }
        Ok(Self::new(open, extension))
    }

    pub fn open_score(&self) -> i32 {
        self.open_score
    }

    pub fn extension_score(&self) -> i32 {
        self.extension_score
    }

    /// Same scores for a different score type
    pub fn cast<T: Score>(&self) -> AffineGapModel<T> {
        AffineGapModel::new(self.open_score, self.extension_score)
    }
}

impl<S: Score> Default for AffineGapModel<S> {
    fn default() -> Self {
        Self::new(GAP_OPEN_SCORE, GAP_EXTENSION_SCORE)
    }
}

impl<S: Score> GapCostable<S> for AffineGapModel<S> {
    #[inline(always)]
    fn open(&self) -> S {
        self.open
    }

    #[inline(always)]
    fn extension(&self) -> S {
        self.extension
    }

    fn cost(&self, len: usize) -> S {
        if len == 0 {
            return S::splat(S::Scalar::ZERO);
        }
        let extended = (len as i64 - 1).saturating_mul(self.extension_score as i64);
        S::splat(S::Scalar::from_i64(
            (self.open_score as i64).saturating_add(extended),
        ))
    }

    #[inline(always)]
    fn compute_cell(&self, cell: &mut DpCell<S>, diagonal_score: S) {
        let best = diagonal_score.max_with(cell.up).max_with(cell.left);
        let opened = best.add(self.open_extension);

        cell.diagonal = cell.current;
        cell.current = best;
        cell.up = cell.up.add(self.extension).max_with(opened);
        cell.left = cell.left.add(self.extension).max_with(opened);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::Lanes;

    #[test]
    fn test_cost_closed_form() {
        let gap = AffineGapModel::<i32>::new(-10, -1);
        assert_eq!(gap.cost(0), 0);
        for len in 1..50 {
            assert_eq!(gap.cost(len), -10 + (len as i32 - 1) * -1);
        }
    }

    #[test]
    fn test_cost_saturates() {
        let gap = AffineGapModel::<i8>::new(-10, -3);
        assert_eq!(gap.cost(1000), i8::MIN);
    }

    #[test]
    fn test_try_new_rejects_positive_scores() {
        assert_eq!(
            AffineGapModel::<i32>::try_new(2, -1),
            Err(Error::InvalidGapModel {
                open: 2,
                extension: -1
            })
        );
        assert!(AffineGapModel::<i32>::try_new(-3, 0).is_ok());
    }

    #[test]
    fn test_compute_cell_prefers_diagonal() {
        let gap = AffineGapModel::<i32>::new(-10, -1);
        let mut cell = DpCell {
            current: 7,
            diagonal: 0,
            up: -4,
            left: -20,
        };
        gap.compute_cell(&mut cell, 3);
        assert_eq!(
            cell,
            DpCell {
                current: 3,
                diagonal: 7,
                up: -5,
                left: -8,
            }
        );
    }

    #[test]
    fn test_compute_cell_takes_gap() {
        let gap = AffineGapModel::<i32>::new(-10, -1);
        let mut cell = DpCell {
            current: 0,
            diagonal: 0,
            up: 12,
            left: 15,
        };
        gap.compute_cell(&mut cell, -5);
        assert_eq!(cell.current, 15);
        assert_eq!(cell.up, 11);
        assert_eq!(cell.left, 14);
    }

    #[test]
    fn test_opened_gap_pays_open_and_extension() {
        let gap = AffineGapModel::<i32>::new(-10, -1);
        let mut cell = DpCell::border(0, i32::MIN / 2);
        gap.compute_cell(&mut cell, 20);
        assert_eq!(cell.current, 20);
        assert_eq!(cell.up, 9);
        assert_eq!(cell.left, 9);

        assert_eq!(gap.border_score(0), 0);
        assert_eq!(gap.border_score(1), -11);
        assert_eq!(gap.border_score(3), -13);
        assert_eq!(gap.border_cell(-13), DpCell::border(-13, -24));
    }

    #[test]
    fn test_lane_cost_matches_scalar() {
        let scalar = AffineGapModel::<i16>::new(-7, -2);
        let lanes = scalar.cast::<Lanes<i16, 8>>();
        for len in 0..20 {
            assert_eq!(lanes.cost(len), Lanes::splat(scalar.cost(len)));
        }
    }
}
