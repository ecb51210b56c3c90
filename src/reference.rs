//! Full matrix rendition of the affine recurrence in `i64`.
//!
//! Keeps every row of H, E and F and never saturates, so it serves as the yardstick the
//! linear-space aligners are checked against. Quadratic in memory, only meant for short
//! sequences.

use crate::config::{Config, Method};
use crate::score_model::ScoreModel;

const NEG_INF: i64 = i64::MIN / 4;

fn substitution(model: &ScoreModel, a: u8, b: u8) -> i64 {
    match model {
        ScoreModel::Unitary(model) if a == b => model.match_score() as i64,
        ScoreModel::Unitary(model) => model.mismatch_score() as i64,
        ScoreModel::Matrix(model) => model.lookup(a, b) as i64,
    }
}

/// Optimal score of aligning `seq1` (columns) against `seq2` (rows) under `config`
pub fn align_score(config: &Config, seq1: &[u8], seq2: &[u8]) -> i64 {
    let open = config.gap_model.open_score() as i64;
    let extension = config.gap_model.extension_score() as i64;
    let border = |len: usize| match len {
        0 => 0,
        len => open + len as i64 * extension,
    };

    let (n, m) = (seq1.len(), seq2.len());
    let local = config.method.is_local();
    let mut h = vec![vec![0i64; n + 1]; m + 1];
    let mut e = vec![vec![NEG_INF; n + 1]; m + 1];
    let mut f = vec![vec![NEG_INF; n + 1]; m + 1];

    if let Method::Global(end_gaps) = config.method {
        for (j, cell) in h[0].iter_mut().enumerate() {
            *cell = if end_gaps.seq1_leading.is_free() { 0 } else { border(j) };
        }
        for (i, row) in h.iter_mut().enumerate() {
            row[0] = if end_gaps.seq2_leading.is_free() { 0 } else { border(i) };
        }
    }

    let mut best = 0;
    for i in 1..=m {
        for j in 1..=n {
            e[i][j] = (e[i][j - 1] + extension).max(h[i][j - 1] + open + extension);
            f[i][j] = (f[i - 1][j] + extension).max(h[i - 1][j] + open + extension);
            let diagonal =
                h[i - 1][j - 1] + substitution(&config.score_model, seq1[j - 1], seq2[i - 1]);
            h[i][j] = diagonal.max(e[i][j]).max(f[i][j]);
            if local {
                h[i][j] = h[i][j].max(0);
                best = best.max(h[i][j]);
            }
        }
    }

    match config.method {
        Method::Local => best,
        Method::Global(end_gaps) => {
            let mut score = h[m][n];
            if end_gaps.seq1_trailing.is_free() {
                score = score.max(h[m].iter().copied().max().unwrap_or(score));
            }
            if end_gaps.seq2_trailing.is_free() {
                score = score.max(h.iter().map(|row| row[n]).max().unwrap_or(score));
            }
            score
        }
    }
}
