//! Affine gap costs and the cell recurrence driven by them.
//!
//! Inside the matrix a gap of `len` positions scores `open + len * extension`: opening charges
//! `open + extension` and every further position `extension`. Border cells follow the same
//! convention through [`GapCostable::border_score`]. [`GapCostable::cost`] is the closed form
//! `open + (len - 1) * extension` quoted for a gap of `len` positions.

mod affine;
mod local;
mod zero_cost;

pub use affine::AffineGapModel;
pub use local::LocalGapModel;
pub use zero_cost::ZeroCostGapModel;

use crate::matrix::DpCell;
use crate::score::{Score, ScoreScalar};

pub trait GapCostable<S: Score> {
    /// Score charged once when a gap opens
    fn open(&self) -> S;
    /// Score charged for every gap position
    fn extension(&self) -> S;
    /// `open + (len - 1) * extension`, zero for an empty gap
    fn cost(&self, len: usize) -> S;

    /// Score of border cell `len` under the regular rule, the score of a leading gap of `len`
    /// positions in the matrix. Zero for the origin.
    fn border_score(&self, len: usize) -> S {
        match len {
            0 => S::splat(S::Scalar::ZERO),
            len => self.cost(len).add(self.extension()),
        }
    }

    /// Border cell holding `score` with both gap companions opened from it
    #[inline(always)]
    fn border_cell(&self, score: S) -> DpCell<S> {
        DpCell::border(score, score.add(self.open()).add(self.extension()))
    }

    /// Applies the affine recurrence to `cell` given the substitution score of its diagonal
    /// predecessor. Ties prefer the diagonal, then `up`, then `left`.
    fn compute_cell(&self, cell: &mut DpCell<S>, diagonal_score: S);
}

impl<S: Score, G: GapCostable<S>> GapCostable<S> for &G {
    #[inline(always)]
    fn open(&self) -> S {
        (**self).open()
    }

    #[inline(always)]
    fn extension(&self) -> S {
        (**self).extension()
    }

    fn cost(&self, len: usize) -> S {
        (**self).cost(len)
    }

    fn border_score(&self, len: usize) -> S {
        (**self).border_score(len)
    }

    #[inline(always)]
    fn compute_cell(&self, cell: &mut DpCell<S>, diagonal_score: S) {
        (**self).compute_cell(cell, diagonal_score);
    }
}
