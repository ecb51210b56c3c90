use std::sync::Arc;

use super::Scoreable;
use crate::rank::RankEncoder;
use crate::score::Score;

const PROTEIN: &[u8] = b"ARNDCQEGHILKMFPSTWYVBZX*";

#[rustfmt::skip]
const BLOSUM62: [i32; 24 * 24] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4, // A
    -1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4, // R
    -2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4, // N
    -2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4, // D
     0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4, // C
    -1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4, // Q
    -1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // E
     0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4, // G
    -2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4, // H
    -1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3, -3, -1, -4, // I
    -1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4, -3, -1, -4, // L
    -1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4, // K
    -1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4, // M
    -2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4, // F
    -1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4, // P
     1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4, // S
     0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1,  0, -4, // T
    -3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -3, -2, -4, // W
    -2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4, // Y
     0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4, // V
    -2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4, // B
    -1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // Z
     0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4, // X
    -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

/// Full substitution matrix over a rank encoded alphabet.
///
/// The outer sequence is encoded with the alphabet size as scale and the inner sequence without,
/// so `outer + inner` indexes the row-major score table directly.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixScoreModel {
    encoder: RankEncoder,
    scores: Arc<[i32]>,
}

impl MatrixScoreModel {
    /// `scores` is row-major, `scores[rank(a) * symbols.len() + rank(b)]`
    pub fn new(symbols: impl AsRef<[u8]>, scores: impl Into<Arc<[i32]>>) -> Self {
        let encoder = RankEncoder::new(symbols, 1);
        let scores = scores.into();
        assert!(
            scores.len() == encoder.len() * encoder.len(),
            "substitution matrix of {} scores does not match an alphabet of {} symbols",
            scores.len(),
            encoder.len()
        );
        Self { encoder, scores }
    }

    /// `ACGT` with a single match and mismatch score
    pub fn dna_simple(match_score: i32, mismatch_score: i32) -> Self {
        let scores = (0..4)
            .flat_map(|a| (0..4).map(move |b| if a == b { match_score } else { mismatch_score }))
            .collect::<Vec<_>>();
        Self::new(b"ACGT", scores)
    }

    pub fn blosum62() -> Self {
        Self::new(PROTEIN, BLOSUM62.to_vec())
    }

    /// Number of symbols in the alphabet
    pub fn size(&self) -> usize {
        self.encoder.len()
    }

    pub fn encoder(&self) -> &RankEncoder {
        &self.encoder
    }

    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    pub fn max_score(&self) -> i32 {
        self.scores.iter().copied().max().unwrap_or_default()
    }

    pub fn min_score(&self) -> i32 {
        self.scores.iter().copied().min().unwrap_or_default()
    }

    /// Score of two raw symbols
    pub fn lookup(&self, a: u8, b: u8) -> i32 {
        self.scores[self.encoder.encode(a) as usize * self.size() + self.encoder.encode(b) as usize]
    }

    pub fn encode_outer(&self, sequence: &[u8]) -> Vec<i32> {
        self.encoder
            .with_scale(self.size() as i32)
            .encode_all(sequence)
    }

    pub fn encode_inner(&self, sequence: &[u8]) -> Vec<i32> {
        self.encoder.encode_all(sequence)
    }
}

impl<S: Score> Scoreable<S> for MatrixScoreModel {
    type Outer = i32;
    type Inner = i32;

    #[inline(always)]
    fn score(&self, outer: i32, inner: i32) -> S {
        S::splat_i32(self.scores[(outer + inner) as usize])
    }
}
