//! Aligners are assembled from one option per [`Category`]: a score model, a gap model and an
//! alignment method.
//!
//! Options are composed at runtime with `|` into a [`Configuration`], which rejects a second
//! option of the same category when it is built. [`AlignerBuilder`] offers the same composition
//! checked at compile time.

mod builder;
mod method;
mod options;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use builder::{AlignerBuilder, Unset};
pub use method::{EndGap, EndGaps, Method};
pub use options::{AlignOption, Configuration};

use crate::error::Result;
use crate::gap_model::AffineGapModel;
use crate::r#const::*;
use crate::score_model::{ScoreModel, UnitaryScoreModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ScoreModel,
    GapModel,
    Method,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::ScoreModel, Category::GapModel, Category::Method];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ScoreModel => "score model",
            Category::GapModel => "gap model",
            Category::Method => "method",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved option per category
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub score_model: ScoreModel,
    /// Gap scores, both must be zero or negative
    pub gap_model: AffineGapModel<i32>,
    pub method: Method,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        AffineGapModel::<i32>::try_new(
            self.gap_model.open_score(),
            self.gap_model.extension_score(),
        )?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Scoring::default().into()
    }
}

/// Plain scores of a unitary global configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Scoring {
    /// Score for two equal symbols
    pub match_score: i32,
    /// Score for two different symbols
    pub mismatch_score: i32,
    /// Score charged once when a gap opens, must not be positive
    pub gap_open_score: i32,
    /// Score charged for every gap position, must not be positive
    pub gap_extension_score: i32,
    pub method: Method,
}

impl Default for Scoring {
    fn default() -> Self {
        Scoring {
            match_score: MATCH_SCORE,
            mismatch_score: MISMATCH_SCORE,
            gap_open_score: GAP_OPEN_SCORE,
            gap_extension_score: GAP_EXTENSION_SCORE,
            method: Method::default(),
        }
    }
}

impl From<Scoring> for Config {
    fn from(scoring: Scoring) -> Self {
        Config {
            score_model: UnitaryScoreModel::new(scoring.match_score, scoring.mismatch_score).into(),
            gap_model: AffineGapModel::new(scoring.gap_open_score, scoring.gap_extension_score),
            method: scoring.method,
        }
    }
}
