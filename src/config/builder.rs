use super::{Config, Method};
use crate::aligner::{Aligner, BatchAligner};
use crate::error::Result;
use crate::gap_model::AffineGapModel;
use crate::score::{Score, ScoreScalar};
use crate::score_model::ScoreModel;

/// Category that has not been configured yet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unset;

/// Builder that tracks the configured categories in its type, so configuring a category twice
/// or building with a category missing does not compile.
///
/// ```
/// use lanealign::{AlignerBuilder, Method, UnitaryScoreModel};
///
/// let aligner = AlignerBuilder::new()
///     .method(Method::local())
///     .score_model(UnitaryScoreModel::new(2, -1))
///     .gap_model(-3, -1)
///     .build::<i16>()
///     .unwrap();
/// assert_eq!(aligner.compute("TTACGT", "ACG").score(), 6);
/// ```
///
/// ```compile_fail
/// use lanealign::{AlignerBuilder, UnitaryScoreModel};
///
/// let builder = AlignerBuilder::new()
///     .score_model(UnitaryScoreModel::default())
///     .score_model(UnitaryScoreModel::default());
/// ```
#[derive(Debug, Clone)]
pub struct AlignerBuilder<Sc = Unset, Ga = Unset, Me = Unset> {
    score_model: Sc,
    gap_model: Ga,
    method: Me,
}

impl AlignerBuilder {
    pub fn new() -> Self {
        Self {
            score_model: Unset,
            gap_model: Unset,
            method: Unset,
        }
    }
}

impl Default for AlignerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ga, Me> AlignerBuilder<Unset, Ga, Me> {
    pub fn score_model(self, model: impl Into<ScoreModel>) -> AlignerBuilder<ScoreModel, Ga, Me> {
        AlignerBuilder {
            score_model: model.into(),
            gap_model: self.gap_model,
            method: self.method,
        }
    }
}

impl<Sc, Me> AlignerBuilder<Sc, Unset, Me> {
    pub fn gap_model(
        self,
        open: i32,
        extension: i32,
    ) -> AlignerBuilder<Sc, AffineGapModel<i32>, Me> {
        AlignerBuilder {
            score_model: self.score_model,
            gap_model: AffineGapModel::new(open, extension),
            method: self.method,
        }
    }
}

impl<Sc, Ga> AlignerBuilder<Sc, Ga, Unset> {
    pub fn method(self, method: Method) -> AlignerBuilder<Sc, Ga, Method> {
        AlignerBuilder {
            score_model: self.score_model,
            gap_model: self.gap_model,
            method,
        }
    }
}

impl AlignerBuilder<ScoreModel, AffineGapModel<i32>, Method> {
    pub fn config(self) -> Config {
        Config {
            score_model: self.score_model,
            gap_model: self.gap_model,
            method: self.method,
        }
    }

    /// Fails only when a gap score is positive
    pub fn build<S: ScoreScalar + Score>(self) -> Result<Aligner<S>> {
        Aligner::new(self.config())
    }

    pub fn build_batch<T: ScoreScalar>(self) -> Result<BatchAligner<T>> {
        BatchAligner::new(self.config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::score_model::MatrixScoreModel;

    #[test]
    fn test_builder_matches_composition() {
        let built = AlignerBuilder::new()
            .gap_model(-10, -1)
            .method(Method::global())
            .score_model(MatrixScoreModel::blosum62())
            .config();
        let composed =
            (MatrixScoreModel::blosum62() | AffineGapModel::new(-10, -1) | Method::global())
                .resolve()
                .unwrap();
        assert_eq!(built, composed);
    }

    #[test]
    fn test_builder_validates_gaps() {
        let result = AlignerBuilder::new()
            .score_model(ScoreModel::default())
            .gap_model(3, -1)
            .method(Method::global())
            .build::<i32>();
        assert!(matches!(
            result,
            Err(Error::InvalidGapModel {
                open: 3,
                extension: -1
            })
        ));
    }
}
