use thiserror::Error;

use crate::config::Category;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("category `{0}` already configured")]
    DuplicateCategory(Category),
    #[error("category `{0}` was never configured")]
    MissingCategory(Category),
    #[error("unknown initialisation rule `{0}` (expected `regular` or `zero`)")]
    UnknownInitRule(String),
    #[error("unknown end gap policy `{0}` (expected `penalised` or `free`)")]
    UnknownEndGap(String),
    #[error("initialisation rule `{rule}` cannot be used for {method} alignment")]
    IncompatibleInitRule {
        rule: &'static str,
        method: &'static str,
    },
    #[error("gap scores must not be positive (open {open}, extension {extension})")]
    InvalidGapModel { open: i32, extension: i32 },
    #[error("batch contains no sequence pairs")]
    EmptyBatch,
    #[error("batch of {len} pairs does not fit into {lanes} lanes")]
    BatchTooLarge { len: usize, lanes: usize },
    #[error("unsupported lane count {0} (expected one of 2, 4, 8, 16, 32, 64)")]
    UnsupportedLaneCount(usize),
    #[error("alphabet of {symbols} symbols does not fit into {bytes} byte lanes")]
    AlphabetTooLarge { symbols: usize, bytes: usize },
    #[error("score overflowed the saturated range of lane {lane}")]
    ScoreOverflow { lane: usize },
}
