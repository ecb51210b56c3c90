use super::GapCostable;
use crate::matrix::DpCell;
use crate::score::{Score, ScoreScalar};

/// Floors every cell at `zero` after the regular update, so an alignment can restart anywhere.
///
/// `zero` starts at 0. The saturated batch sweep lowers it together with every stored score when
/// it rebiases narrow lanes, which keeps all scores relative to the floor unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalGapModel<G, S> {
    inner: G,
    zero: S,
}

impl<G: GapCostable<S>, S: Score> LocalGapModel<G, S> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            zero: S::splat(S::Scalar::ZERO),
        }
    }

    #[inline(always)]
    pub fn zero(&self) -> S {
        self.zero
    }

    pub fn set_zero(&mut self, zero: S) {
        self.zero = zero;
    }

    pub fn rebias(&mut self, bias: S) {
        self.zero = self.zero.sub(bias);
    }

    /// Border cell at the current floor
    #[inline(always)]
    pub fn border(&self) -> DpCell<S> {
        self.inner.border_cell(self.zero)
    }
}

impl<G: GapCostable<S>, S: Score> GapCostable<S> for LocalGapModel<G, S> {
    #[inline(always)]
    fn open(&self) -> S {
        self.inner.open()
    }

    #[inline(always)]
    fn extension(&self) -> S {
        self.inner.extension()
    }

    /// Local alignments never pay for a border gap
    fn cost(&self, _len: usize) -> S {
        self.zero
    }

    fn border_score(&self, _len: usize) -> S {
        self.zero
    }

    #[inline(always)]
    fn compute_cell(&self, cell: &mut DpCell<S>, diagonal_score: S) {
        self.inner.compute_cell(cell, diagonal_score);
        cell.current = cell.current.max_with(self.zero);
    }
}
