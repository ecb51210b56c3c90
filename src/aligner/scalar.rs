use std::fmt;
use std::marker::PhantomData;

use super::Deferred;
use crate::config::{AlignOption, Config, Configuration, Method};
use crate::error::Result;
use crate::gap_model::{AffineGapModel, LocalGapModel};
use crate::matrix::{DpVector, InitRule};
use crate::recursion::sweep;
use crate::score::{Score, ScoreScalar};
use crate::score_model::{LocalScoreModel, ScoreModel, Scoreable};
use crate::tracker::{GlobalTracker, LocalTracker, Trackable};

/// Score of one pairwise alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignResult<S> {
    score: S,
}

impl<S: Copy> AlignResult<S> {
    pub fn score(&self) -> S {
        self.score
    }
}

impl<S: fmt::Display> fmt::Display for AlignResult<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score {}", self.score)
    }
}

/// Aligns one pair of sequences at a time with scores of type `S`
#[derive(Debug, Clone)]
pub struct Aligner<S = i32> {
    config: Config,
    gap: AffineGapModel<S>,
    _score: PhantomData<S>,
}

impl<S: ScoreScalar + Score> Aligner<S> {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "{} alignment with {} scoring and {}-byte scores",
            config.method,
            config.score_model.kind(),
            S::BYTES
        );
        Ok(Self {
            gap: config.gap_model.cast(),
            config,
            _score: PhantomData,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Aligns `seq1` (outer, columns) against `seq2` (inner, rows).
    ///
    /// Panics if a matrix score model is configured and a symbol is not part of its alphabet.
    pub fn compute(&self, seq1: impl AsRef<[u8]>, seq2: impl AsRef<[u8]>) -> AlignResult<S> {
        let (seq1, seq2) = (seq1.as_ref(), seq2.as_ref());
        let score = match &self.config.score_model {
            ScoreModel::Unitary(model) => {
                self.align(model, &model.encode(seq1), &model.encode(seq2))
            }
            ScoreModel::Matrix(model) => self.align(
                model,
                &model.encode_outer(seq1),
                &model.encode_inner(seq2),
            ),
        };
        AlignResult { score }
    }

    /// Wraps [`Aligner::compute`] into a unit of work that runs once started or awaited
    pub fn defer<A, B>(&self, seq1: A, seq2: B) -> Deferred<impl FnOnce() -> AlignResult<S>>
    where
        A: AsRef<[u8]>,
        B: AsRef<[u8]>,
    {
        let aligner = self.clone();
        Deferred::new(move || aligner.compute(seq1, seq2))
    }

    fn align<M>(&self, model: &M, outer: &[M::Outer], inner: &[M::Inner]) -> S
    where
        M: Scoreable<S> + Clone,
    {
        match self.config.method {
            Method::Global(end_gaps) => {
                let (rows, columns) = (inner.len(), outer.len());
                let mut column = DpVector::new(rows, end_gaps.seq2_leading.init_rule(), &self.gap);
                let row = DpVector::new(columns, end_gaps.seq1_leading.init_rule(), &self.gap);

                let mut tracker = GlobalTracker::new(
                    outer.len(),
                    end_gaps.seq1_trailing.is_free(),
                    end_gaps.seq2_trailing.is_free(),
                );
                sweep(model, &self.gap, outer, inner, &mut column, &row, &mut tracker);
                tracker.max_score()
            }
            Method::Local => {
                let model = LocalScoreModel::new(model.clone());
                let gap = LocalGapModel::new(self.gap);
                let mut column = DpVector::new(inner.len(), InitRule::Zero, &gap);
                let row = DpVector::new(outer.len(), InitRule::Zero, &gap);

                let mut tracker = LocalTracker::new();
                sweep(&model, &gap, outer, inner, &mut column, &row, &mut tracker);
                tracker.max_score()
            }
        }
    }
}

impl<S: ScoreScalar + Score> Default for Aligner<S> {
    fn default() -> Self {
        Self {
            gap: AffineGapModel::default(),
            config: Config::default(),
            _score: PhantomData,
        }
    }
}

/// Builds an aligner from a runtime list of options, see [`Configuration`](crate::Configuration)
pub fn configure<I, O>(options: I) -> Result<Aligner<i32>>
where
    I: IntoIterator<Item = O>,
    O: Into<AlignOption>,
{
    options.into_iter().collect::<Configuration>().build()
}
