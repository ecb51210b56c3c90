use super::Scoreable;
use crate::r#const::{MATCH_SCORE, MISMATCH_SCORE};
use crate::score::Score;

/// Match or mismatch, decided by symbol equality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitaryScoreModel {
    match_score: i32,
    mismatch_score: i32,
}

impl UnitaryScoreModel {
    pub fn new(match_score: i32, mismatch_score: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
        }
    }

    pub fn match_score(&self) -> i32 {
        self.match_score
    }

    pub fn mismatch_score(&self) -> i32 {
        self.mismatch_score
    }

    /// Every byte is its own symbol, the ranks
    /// [`RankEncoder::identity`](crate::RankEncoder::identity) assigns
    pub fn encode(&self, sequence: &[u8]) -> Vec<i32> {
        sequence.iter().map(|&symbol| symbol as i32).collect()
    }
}

impl Default for UnitaryScoreModel {
    fn default() -> Self {
        Self::new(MATCH_SCORE, MISMATCH_SCORE)
    }
}

impl<S: Score> Scoreable<S> for UnitaryScoreModel {
    type Outer = i32;
    type Inner = i32;

    #[inline(always)]
    fn score(&self, outer: i32, inner: i32) -> S {
        S::splat_i32(if outer == inner {
            self.match_score
        } else {
            self.mismatch_score
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::RankEncoder;

    #[test]
    fn test_encode_uses_byte_ranks() {
        let model = UnitaryScoreModel::default();
        let sequence = b"ACGT\x00\xffn";
        assert_eq!(model.encode(sequence), RankEncoder::identity().encode_all(sequence));
        assert!(model.encode(b"").is_empty());
    }

    #[test]
    fn test_match_and_mismatch() {
        let model = UnitaryScoreModel::default();
        let encoded = model.encode(b"AAC");
        assert_eq!(Scoreable::<i32>::score(&model, encoded[0], encoded[1]), 4);
        assert_eq!(Scoreable::<i32>::score(&model, encoded[0], encoded[2]), -5);
    }

    #[test]
    fn test_score_diagonal_adds_predecessor() {
        let model = UnitaryScoreModel::new(2, -1);
        assert_eq!(Scoreable::<i16>::score_diagonal(&model, 10, 7, 7), 12);
        assert_eq!(Scoreable::<i16>::score_diagonal(&model, 10, 7, 8), 9);
    }
}
