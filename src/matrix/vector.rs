use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::DpCell;
use crate::error::{Error, Result};
use crate::gap_model::{GapCostable, ZeroCostGapModel};
use crate::score::{Score, ScoreScalar};

/// How a border vector is filled before the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InitRule {
    /// Cell i holds the score of a leading gap of length i, `open + i * extension`
    Regular,
    /// Every cell holds zero, used by local alignment and free leading end gaps
    Zero,
}

impl InitRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            InitRule::Regular => "regular",
            InitRule::Zero => "zero",
        }
    }
}

impl fmt::Display for InitRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InitRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "regular" => Ok(InitRule::Regular),
            "zero" => Ok(InitRule::Zero),
            other => Err(Error::UnknownInitRule(other.to_string())),
        }
    }
}

/// Cells along one border of the DP matrix, one per sequence position plus the origin
#[derive(Debug, Clone)]
pub struct DpVector<S> {
    cells: Vec<DpCell<S>>,
}

impl<S: Score> DpVector<S> {
    /// Allocates `sequence_len + 1` cells initialised per `rule`
    pub fn new<G: GapCostable<S>>(sequence_len: usize, rule: InitRule, gap: &G) -> Self {
        let zero = S::splat(S::Scalar::ZERO);
        let mut vector = Self {
            cells: vec![DpCell::splat(zero); sequence_len + 1],
        };
        vector.initialise(rule, gap);
        vector
    }

    pub fn from_cells(cells: Vec<DpCell<S>>) -> Self {
        Self { cells }
    }

    pub fn initialise<G: GapCostable<S>>(&mut self, rule: InitRule, gap: &G) {
        match rule {
            InitRule::Regular => self.fill(gap),
            InitRule::Zero => self.fill(&ZeroCostGapModel::new(gap, S::splat(S::Scalar::ZERO))),
        }
    }

    fn fill<G: GapCostable<S>>(&mut self, gap: &G) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = match i {
                0 => DpCell::splat(S::splat(S::Scalar::ZERO)),
                i => gap.border_cell(gap.border_score(i)),
            };
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn last(&self) -> &DpCell<S> {
        // A vector always holds at least the origin cell
        &self.cells[self.cells.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DpCell<S>> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, DpCell<S>> {
        self.cells.iter_mut()
    }

    /// Maximum `current` over all cells
    pub fn max_current(&self) -> S {
        self.cells
            .iter()
            .fold(S::lowest(), |best, cell| best.max_with(cell.current))
    }

    /// Shifts every cell down by `bias`
    pub fn rebias(&mut self, bias: S) {
        self.cells.iter_mut().for_each(|cell| cell.rebias(bias));
    }
}

impl<S> Index<usize> for DpVector<S> {
    type Output = DpCell<S>;

    #[inline(always)]
    fn index(&self, index: usize) -> &DpCell<S> {
        &self.cells[index]
    }
}

impl<S> IndexMut<usize> for DpVector<S> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut DpCell<S> {
        &mut self.cells[index]
    }
}
