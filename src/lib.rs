//! Lanealign computes optimal pairwise alignment scores of byte sequences with affine gap costs.
//! It keeps a single column of the dynamic programming matrix, so memory is linear in the length
//! of the shorter side, and it runs the same recurrence over lane vectors to align a whole batch
//! of pairs in one sweep. Only scores are computed, no traceback.
//!
//! A gap of `len` positions scores `open + len * extension`: opening a gap charges the open score
//! once and every gap position charges the extension score. Both must be zero or negative.
//!
//! Supported methods:
//! - Global alignment (Needleman-Wunsch/Gotoh) with any combination of free leading and trailing
//!   gaps per sequence
//! - Local alignment (Smith-Waterman/Gotoh)
//!
//! # Example: one pair
//!
//! ```rust
//! use lanealign::{AffineGapModel, Method, UnitaryScoreModel};
//!
//! let aligner = (UnitaryScoreModel::new(4, -5) | AffineGapModel::new(-10, -1) | Method::global())
//!     .build::<i32>()
//!     .unwrap();
//! assert_eq!(aligner.compute("ACGTACGT", "ACGTACGT").score(), 32);
//! ```
//!
//! # Example: a batch of pairs
//!
//! Every pair occupies one lane. Narrow scores fit more lanes into a vector register, local
//! alignments rebias the lanes while sweeping so their scores may exceed the range of the lane
//! type.
//!
//! ```rust
//! use lanealign::{AlignerBuilder, MatrixScoreModel, Method};
//!
//! let aligner = AlignerBuilder::new()
//!     .score_model(MatrixScoreModel::blosum62())
//!     .gap_model(-11, -1)
//!     .method(Method::local())
//!     .build_batch::<i8>()
//!     .unwrap();
//!
//! let pairs = [Some(("HEAGAWGHEE", "PAWHEAE")), None, Some(("MKTAYIAK", "MKTAYIAK"))];
//! let result = aligner.compute(&pairs).unwrap();
//! assert_eq!(result.score(1), None);
//! assert!(result.score(2).unwrap() > result.score(0).unwrap());
//! ```
//!
//! # Example: configuration at runtime
//!
//! Options may come from anywhere, each category must be answered exactly once.
//!
//! ```rust
//! use lanealign::{AlignOption, Configuration, EndGaps, Error, Method, UnitaryScoreModel};
//!
//! let mut options = Configuration::new().with(UnitaryScoreModel::new(1, -1));
//! options.extend([AlignOption::from(Method::global_with(EndGaps::free()))]);
//! assert!(matches!(options.build::<i16>(), Err(Error::MissingCategory(_))));
//! ```

pub mod aligner;
pub mod config;
mod r#const;
mod error;
pub mod gap_model;
pub mod interleave;
pub mod matrix;
pub mod rank;
pub mod recursion;
pub mod reference;
pub mod score;
pub mod score_model;
pub mod simd;
pub mod tracker;

pub use aligner::{AlignResult, Aligner, BatchAligner, BatchResult, Deferred, configure};
pub use config::{
    AlignOption, AlignerBuilder, Category, Config, Configuration, EndGap, EndGaps, Method, Scoring,
    Unset,
};
pub use error::{Error, Result};
pub use gap_model::AffineGapModel;
pub use matrix::InitRule;
pub use rank::RankEncoder;
pub use score_model::{MatrixScoreModel, ScoreModel, UnitaryScoreModel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_and_batch_agree() {
        let _ = env_logger::builder().is_test(true).try_init();

        let config = Config::from(Scoring {
            method: Method::global_with(EndGaps::seq2_free()),
            ..Scoring::default()
        });
        let aligner = Aligner::<i32>::new(config.clone()).unwrap();
        let batch = BatchAligner::<i16>::new(config).unwrap();

        let pairs = [
            ("GATTACA", "GCATGCT"),
            ("ACGTACGTACGT", "ACGT"),
            ("", "ACGT"),
            ("TTTT", ""),
        ];
        let expected = pairs
            .iter()
            .map(|(a, b)| aligner.compute(a, b).score() as i64)
            .collect::<Vec<_>>();
        assert_eq!(batch.compute_all(&pairs).unwrap(), expected);
    }
}
