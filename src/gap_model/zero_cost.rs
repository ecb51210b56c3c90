use super::GapCostable;
use crate::matrix::DpCell;
use crate::score::Score;

/// Makes border gaps free: [`GapCostable::cost`] and [`GapCostable::border_score`] return the
/// supplied zero for any length while the cell update is left to the wrapped model. Backs the
/// `zero` border rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroCostGapModel<G, S> {
    inner: G,
    zero: S,
}

impl<G: GapCostable<S>, S: Score> ZeroCostGapModel<G, S> {
    pub fn new(inner: G, zero: S) -> Self {
        Self { inner, zero }
    }
}

impl<G: GapCostable<S>, S: Score> GapCostable<S> for ZeroCostGapModel<G, S> {
    #[inline(always)]
    fn open(&self) -> S {
        self.inner.open()
    }

    #[inline(always)]
    fn extension(&self) -> S {
        self.inner.extension()
    }

    fn cost(&self, _len: usize) -> S {
        self.zero
    }

    fn border_score(&self, _len: usize) -> S {
        self.zero
    }

    #[inline(always)]
    fn compute_cell(&self, cell: &mut DpCell<S>, diagonal_score: S) {
        self.inner.compute_cell(cell, diagonal_score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gap_model::AffineGapModel;

    #[test]
    fn test_cost_is_supplied_zero() {
        let free = ZeroCostGapModel::new(AffineGapModel::<i32>::new(-10, -1), 0);
        assert_eq!(free.cost(0), 0);
        assert_eq!(free.cost(17), 0);
        assert_eq!(free.border_score(17), 0);
        assert_eq!(free.open(), -10);
        assert_eq!(free.border_cell(0), DpCell::border(0, -11));
    }

    #[test]
    fn test_cell_update_is_delegated() {
        let affine = AffineGapModel::<i32>::new(-10, -1);
        let free = ZeroCostGapModel::new(affine, 0);
        let mut a = DpCell::border(3, -7);
        let mut b = a;
        affine.compute_cell(&mut a, 8);
        free.compute_cell(&mut b, 8);
        assert_eq!(a, b);
    }
}
