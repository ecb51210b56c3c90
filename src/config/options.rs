use std::ops::BitOr;

use super::{Category, Config, Method};
use crate::aligner::{Aligner, BatchAligner};
use crate::error::{Error, Result};
use crate::gap_model::AffineGapModel;
use crate::score::{Score, ScoreScalar};
use crate::score_model::{MatrixScoreModel, ScoreModel, UnitaryScoreModel};

/// A single configuration option
#[derive(Debug, Clone, PartialEq)]
pub enum AlignOption {
    ScoreModel(ScoreModel),
    GapModel(AffineGapModel<i32>),
    Method(Method),
}

impl AlignOption {
    pub fn category(&self) -> Category {
        match self {
            AlignOption::ScoreModel(_) => Category::ScoreModel,
            AlignOption::GapModel(_) => Category::GapModel,
            AlignOption::Method(_) => Category::Method,
        }
    }

    /// Whether this option configures `category`
    pub fn answers_for(&self, category: Category) -> bool {
        self.category() == category
    }
}

impl From<ScoreModel> for AlignOption {
    fn from(model: ScoreModel) -> Self {
        AlignOption::ScoreModel(model)
    }
}

impl From<UnitaryScoreModel> for AlignOption {
    fn from(model: UnitaryScoreModel) -> Self {
        AlignOption::ScoreModel(model.into())
    }
}

impl From<MatrixScoreModel> for AlignOption {
    fn from(model: MatrixScoreModel) -> Self {
        AlignOption::ScoreModel(model.into())
    }
}

impl From<AffineGapModel<i32>> for AlignOption {
    fn from(model: AffineGapModel<i32>) -> Self {
        AlignOption::GapModel(model)
    }
}

impl From<Method> for AlignOption {
    fn from(method: Method) -> Self {
        AlignOption::Method(method)
    }
}

/// Ordered options, at most one per category once built.
///
/// ```
/// use lanealign::{AffineGapModel, Method, UnitaryScoreModel};
///
/// let aligner = (UnitaryScoreModel::new(4, -5) | AffineGapModel::new(-10, -1) | Method::global())
///     .build::<i32>()
///     .unwrap();
/// assert_eq!(aligner.compute("ACGT", "ACGT").score(), 16);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    options: Vec<AlignOption>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, option: impl Into<AlignOption>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn options(&self) -> &[AlignOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// First option answering for `category`, wherever it was added
    pub fn find(&self, category: Category) -> Option<&AlignOption> {
        self.options
            .iter()
            .find(|option| option.answers_for(category))
    }

    /// Checks that every category is configured exactly once
    pub fn resolve(&self) -> Result<Config> {
        for category in Category::ALL {
            let count = self
                .options
                .iter()
                .filter(|option| option.answers_for(category))
                .count();
            if count > 1 {
                return Err(Error::DuplicateCategory(category));
            }
        }

        let score_model = match self.find(Category::ScoreModel) {
            Some(AlignOption::ScoreModel(model)) => model.clone(),
            _ => return Err(Error::MissingCategory(Category::ScoreModel)),
        };
        let gap_model = match self.find(Category::GapModel) {
            Some(AlignOption::GapModel(model)) => *model,
            _ => return Err(Error::MissingCategory(Category::GapModel)),
        };
        let method = match self.find(Category::Method) {
            Some(AlignOption::Method(method)) => *method,
            _ => return Err(Error::MissingCategory(Category::Method)),
        };

        let config = Config {
            score_model,
            gap_model,
            method,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn build<S: ScoreScalar + Score>(&self) -> Result<Aligner<S>> {
        Aligner::new(self.resolve()?)
    }

    pub fn build_batch<T: ScoreScalar>(&self) -> Result<BatchAligner<T>> {
        BatchAligner::new(self.resolve()?)
    }
}

impl<O: Into<AlignOption>> FromIterator<O> for Configuration {
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<O: Into<AlignOption>> Extend<O> for Configuration {
    fn extend<I: IntoIterator<Item = O>>(&mut self, iter: I) {
        self.options.extend(iter.into_iter().map(Into::into));
    }
}

impl<R: Into<AlignOption>> BitOr<R> for Configuration {
    type Output = Configuration;

    fn bitor(self, option: R) -> Configuration {
        self.with(option)
    }
}

macro_rules! impl_compose {
    ($($option:ty),*) => {
        $(
            impl<R: Into<AlignOption>> BitOr<R> for $option {
                type Output = Configuration;

                fn bitor(self, option: R) -> Configuration {
                    Configuration::new().with(self).with(option)
                }
            }
        )*
    };
}

impl_compose!(
    AlignOption,
    ScoreModel,
    UnitaryScoreModel,
    MatrixScoreModel,
    AffineGapModel<i32>,
    Method
);
