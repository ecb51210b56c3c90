use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::matrix::InitRule;

/// Whether a gap at one end of one sequence costs anything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EndGap {
    #[default]
    Penalised,
    Free,
}

impl EndGap {
    pub fn is_free(&self) -> bool {
        matches!(self, EndGap::Free)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EndGap::Penalised => "penalised",
            EndGap::Free => "free",
        }
    }

    /// Border rule of the matrix edge governed by this end gap
    pub fn init_rule(&self) -> InitRule {
        match self {
            EndGap::Penalised => InitRule::Regular,
            EndGap::Free => InitRule::Zero,
        }
    }
}

impl fmt::Display for EndGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndGap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "penalised" | "penalized" => Ok(EndGap::Penalised),
            "free" => Ok(EndGap::Free),
            other => Err(Error::UnknownEndGap(other.to_string())),
        }
    }
}

/// End gap policy of a global alignment.
///
/// `seq1` is the outer sequence (matrix columns), `seq2` the inner one (matrix rows). A free
/// leading gap in `seq1` skips a prefix of `seq1`, a free trailing gap in `seq1` skips a suffix
/// of it, and likewise for `seq2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EndGaps {
    pub seq1_leading: EndGap,
    pub seq1_trailing: EndGap,
    pub seq2_leading: EndGap,
    pub seq2_trailing: EndGap,
}

impl EndGaps {
    pub fn penalised() -> Self {
        Self::default()
    }

    /// Every end gap is free, also known as overlap alignment
    pub fn free() -> Self {
        Self {
            seq1_leading: EndGap::Free,
            seq1_trailing: EndGap::Free,
            seq2_leading: EndGap::Free,
            seq2_trailing: EndGap::Free,
        }
    }

    /// `seq2` must align completely somewhere inside `seq1`
    pub fn seq1_free() -> Self {
        Self {
            seq1_leading: EndGap::Free,
            seq1_trailing: EndGap::Free,
            ..Self::default()
        }
    }

    /// `seq1` must align completely somewhere inside `seq2`
    pub fn seq2_free() -> Self {
        Self {
            seq2_leading: EndGap::Free,
            seq2_trailing: EndGap::Free,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Method {
    Global(EndGaps),
    Local,
}

impl Method {
    pub fn global() -> Self {
        Method::Global(EndGaps::default())
    }

    pub fn global_with(end_gaps: EndGaps) -> Self {
        Method::Global(end_gaps)
    }

    pub fn local() -> Self {
        Method::Local
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Method::Local)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Global(_) => "global",
            Method::Local => "local",
        }
    }

    /// Initialises both leading borders with `rule`. A global alignment with `zero` borders has
    /// free leading end gaps. Local alignments only accept `zero`.
    pub fn with_border_rule(self, rule: InitRule) -> Result<Self> {
        match (self, rule) {
            (Method::Local, InitRule::Zero) => Ok(Method::Local),
            (Method::Local, rule) => Err(Error::IncompatibleInitRule {
                rule: rule.as_str(),
                method: self.as_str(),
            }),
            (Method::Global(end_gaps), rule) => {
                let leading = match rule {
                    InitRule::Regular => EndGap::Penalised,
                    InitRule::Zero => EndGap::Free,
                };
                Ok(Method::Global(EndGaps {
                    seq1_leading: leading,
                    seq2_leading: leading,
                    ..end_gaps
                }))
            }
        }
    }

    /// Parses the border rule first, see [`Method::with_border_rule`]
    pub fn with_border_rule_str(self, rule: &str) -> Result<Self> {
        self.with_border_rule(rule.parse()?)
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::global()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_end_gap() {
        assert_eq!("free".parse::<EndGap>(), Ok(EndGap::Free));
        assert_eq!("penalized".parse::<EndGap>(), Ok(EndGap::Penalised));
        assert_eq!(
            "cheap".parse::<EndGap>(),
            Err(Error::UnknownEndGap("cheap".to_string()))
        );
    }

    #[test]
    fn test_local_rejects_regular_borders() {
        assert_eq!(
            Method::local().with_border_rule(InitRule::Regular),
            Err(Error::IncompatibleInitRule {
                rule: "regular",
                method: "local"
            })
        );
        assert_eq!(
            Method::local().with_border_rule(InitRule::Zero),
            Ok(Method::Local)
        );
    }

    #[test]
    fn test_global_zero_borders_free_leading_gaps() {
        let method = Method::global_with(EndGaps::seq2_free())
            .with_border_rule(InitRule::Zero)
            .unwrap();
        assert_eq!(
            method,
            Method::Global(EndGaps {
                seq1_leading: EndGap::Free,
                seq1_trailing: EndGap::Penalised,
                seq2_leading: EndGap::Free,
                seq2_trailing: EndGap::Free,
            })
        );
    }

    #[test]
    fn test_unknown_border_rule() {
        assert_eq!(
            Method::global().with_border_rule_str("diagonal"),
            Err(Error::UnknownInitRule("diagonal".to_string()))
        );
    }
}
