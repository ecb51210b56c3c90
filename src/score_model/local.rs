use super::Scoreable;
use crate::score::{Score, ScoreScalar};

/// Floors the diagonal extension at `zero`, so a local alignment may start at any cell
#[derive(Debug, Clone, PartialEq)]
pub struct LocalScoreModel<M, S> {
    inner: M,
    zero: S,
}

impl<M: Scoreable<S>, S: Score> LocalScoreModel<M, S> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            zero: S::splat(S::Scalar::ZERO),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn zero(&self) -> S {
        self.zero
    }

    pub fn rebias(&mut self, bias: S) {
        self.zero = self.zero.sub(bias);
    }
}

impl<M: Scoreable<S>, S: Score> Scoreable<S> for LocalScoreModel<M, S> {
    type Outer = M::Outer;
    type Inner = M::Inner;

    #[inline(always)]
    fn score(&self, outer: M::Outer, inner: M::Inner) -> S {
        self.inner.score(outer, inner)
    }

    #[inline(always)]
    fn score_diagonal(&self, diagonal: S, outer: M::Outer, inner: M::Inner) -> S {
        self.inner
            .score_diagonal(diagonal, outer, inner)
            .max_with(self.zero)
    }
}
