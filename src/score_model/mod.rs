//! Substitution scoring. Scalar models score two encoded symbols, lane models score one lane
//! vector of ranks against another, and [`Profile`] replaces per-cell scoring of a shared
//! outer sequence with table lookups.

mod lanes;
mod local;
mod matrix;
mod profile;
mod unitary;

pub use lanes::{LaneScoreModel, PAD_INNER, PAD_OUTER};
pub use local::LocalScoreModel;
pub use matrix::MatrixScoreModel;
pub use profile::Profile;
pub use unitary::UnitaryScoreModel;

use crate::rank::RankEncoder;
use crate::score::Score;

pub trait Scoreable<S: Score> {
    /// Symbol of the outer (column) sequence as seen by the model
    type Outer: Copy;
    /// Symbol of the inner (row) sequence as seen by the model
    type Inner: Copy;

    fn score(&self, outer: Self::Outer, inner: Self::Inner) -> S;

    /// Score of extending the alignment ending at the diagonal predecessor
    #[inline(always)]
    fn score_diagonal(&self, diagonal: S, outer: Self::Outer, inner: Self::Inner) -> S {
        diagonal.add(self.score(outer, inner))
    }
}

/// Substitution model selected by a configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreModel {
    Unitary(UnitaryScoreModel),
    Matrix(MatrixScoreModel),
}

impl ScoreModel {
    pub fn kind(&self) -> &'static str {
        match self {
            ScoreModel::Unitary(_) => "unitary",
            ScoreModel::Matrix(_) => "matrix",
        }
    }

    /// Largest score a single substitution can add
    pub fn max_score(&self) -> i32 {
        match self {
            ScoreModel::Unitary(model) => model.match_score().max(model.mismatch_score()),
            ScoreModel::Matrix(model) => model.max_score(),
        }
    }

    /// Smallest score a single substitution can add
    pub fn min_score(&self) -> i32 {
        match self {
            ScoreModel::Unitary(model) => model.match_score().min(model.mismatch_score()),
            ScoreModel::Matrix(model) => model.min_score(),
        }
    }

    /// Encoder producing the lane ranks for a batch over `sequences`. Unitary scoring only
    /// compares symbols so a dense alphabet of the observed bytes is enough.
    pub fn batch_encoder<I, A>(&self, sequences: I) -> RankEncoder
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[u8]>,
    {
        match self {
            ScoreModel::Unitary(_) => RankEncoder::from_sequences(sequences),
            ScoreModel::Matrix(model) => model.encoder().clone(),
        }
    }
}

impl Default for ScoreModel {
    fn default() -> Self {
        ScoreModel::Unitary(UnitaryScoreModel::default())
    }
}

impl From<UnitaryScoreModel> for ScoreModel {
    fn from(model: UnitaryScoreModel) -> Self {
        ScoreModel::Unitary(model)
    }
}

impl From<MatrixScoreModel> for ScoreModel {
    fn from(model: MatrixScoreModel) -> Self {
        ScoreModel::Matrix(model)
    }
}
