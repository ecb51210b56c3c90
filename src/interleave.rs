//! Transposes a batch of sequence pairs into one lane vector per sequence position.
//!
//! Every lane holds one pair. The outer sequences are padded at the end with [`PAD_OUTER`] up to
//! the longest outer sequence, the inner sequences at the front with [`PAD_INNER`] up to the
//! longest inner sequence. Front padding moves the real rows of a short inner sequence down to
//! the last row of the batch, so every lane finishes its last row together and the sweep never
//! branches per lane. Padded rows score a fixed padding score per row which is subtracted again
//! once the sweep is done.

use crate::error::{Error, Result};
use crate::gap_model::GapCostable;
use crate::matrix::{DpVector, InitRule};
use crate::rank::RankEncoder;
use crate::score::{Score, ScoreScalar};
use crate::score_model::{PAD_INNER, PAD_OUTER};
use crate::simd::LaneVector;

#[derive(Debug, Clone)]
pub struct InterleavedBatch<V> {
    outer: Vec<V>,
    inner: Vec<V>,
    outer_lengths: Vec<usize>,
    offsets: Vec<usize>,
    valid: Vec<bool>,
}

impl<V: LaneVector> InterleavedBatch<V> {
    /// Packs `pairs` of (outer, inner) sequences, one per lane. `None` entries and lanes past the
    /// end of `pairs` are padding slots and yield no score.
    pub fn new<A, B>(pairs: &[Option<(A, B)>], encoder: &RankEncoder) -> Result<Self>
    where
        A: AsRef<[u8]>,
        B: AsRef<[u8]>,
    {
        let lanes = V::LANES;
        if pairs.len() > lanes {
            return Err(Error::BatchTooLarge {
                len: pairs.len(),
                lanes,
            });
        }
        if pairs.iter().all(Option::is_none) {
            return Err(Error::EmptyBatch);
        }
        if encoder.len() as i64 > V::Scalar::MAX.to_i64() {
            return Err(Error::AlphabetTooLarge {
                symbols: encoder.len(),
                bytes: V::Scalar::BYTES,
            });
        }

        let encoded = (0..lanes)
            .map(|k| {
                pairs.get(k).and_then(Option::as_ref).map(|(a, b)| {
                    (
                        encoder.with_scale(1).encode_all(a.as_ref()),
                        encoder.with_scale(1).encode_all(b.as_ref()),
                    )
                })
            })
            .collect::<Vec<_>>();

        let outer_len = encoded.iter().flatten().map(|(a, _)| a.len()).max().unwrap_or(0);
        let inner_len = encoded.iter().flatten().map(|(_, b)| b.len()).max().unwrap_or(0);
        let offsets = encoded
            .iter()
            .map(|pair| inner_len - pair.as_ref().map_or(0, |(_, b)| b.len()))
            .collect::<Vec<_>>();

        let rank = |rank: i32| V::Scalar::from_i64(rank as i64);
        let outer = (0..outer_len)
            .map(|j| {
                V::from_fn(|k| match &encoded[k] {
                    Some((a, _)) if j < a.len() => rank(a[j]),
                    _ => rank(PAD_OUTER as i32),
                })
            })
            .collect();
        let inner = (0..inner_len)
            .map(|i| {
                V::from_fn(|k| match &encoded[k] {
                    Some((_, b)) if i >= offsets[k] => rank(b[i - offsets[k]]),
                    _ => rank(PAD_INNER as i32),
                })
            })
            .collect();

        log::trace!(
            "packed {} pairs into {} lanes, {} outer and {} inner positions",
            encoded.iter().flatten().count(),
            lanes,
            outer_len,
            inner_len
        );

        Ok(Self {
            outer,
            inner,
            outer_lengths: encoded
                .iter()
                .map(|pair| pair.as_ref().map_or(0, |(a, _)| a.len()))
                .collect(),
            offsets,
            valid: encoded.iter().map(Option::is_some).collect(),
        })
    }

    pub fn lanes(&self) -> usize {
        V::LANES
    }

    /// Outer ranks, one lane vector per column
    pub fn outer(&self) -> &[V] {
        &self.outer
    }

    /// Inner ranks, one lane vector per row
    pub fn inner(&self) -> &[V] {
        &self.inner
    }

    /// Length of the outer sequence of `lane`, which is the column its score is read from
    pub fn outer_length(&self, lane: usize) -> usize {
        self.outer_lengths[lane]
    }

    /// Number of padding rows in front of the inner sequence of `lane`
    pub fn offset(&self, lane: usize) -> usize {
        self.offsets[lane]
    }

    pub fn max_offset(&self) -> usize {
        self.offsets.iter().copied().max().unwrap_or(0)
    }

    pub fn is_valid(&self, lane: usize) -> bool {
        self.valid[lane]
    }

    /// Column 0 border of a batch: padding rows accumulate `padding` each, the real rows
    /// continue with the `rule` border of `gap` on top of that.
    pub fn column_border<G: GapCostable<V>>(
        &self,
        gap: &G,
        rule: InitRule,
        padding: i64,
    ) -> DpVector<V> {
        let border = DpVector::new(self.inner.len(), rule, gap);
        let cells = (0..=self.inner.len())
            .map(|i| {
                if i == 0 {
                    return border[0];
                }
                let current = V::from_fn(|k| {
                    let offset = self.offsets[k];
                    if i <= offset {
                        return V::Scalar::from_i64(padding * i as i64);
                    }
                    // a saturated border stays saturated so the sweep can report it
                    match border[i - offset].current.lane(k) {
                        score if score == V::Scalar::MIN => score,
                        score => V::Scalar::from_i64(padding * offset as i64 + score.to_i64()),
                    }
                });
                gap.border_cell(current)
            })
            .collect();
        DpVector::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gap_model::AffineGapModel;
    use crate::simd::Lanes;

    type V = Lanes<i16, 4>;

    #[test]
    fn test_ragged_layout() {
        let encoder = RankEncoder::dna();
        let pairs = [Some(("ACG", "T")), None, Some(("A", "GGA"))];
        let batch = InterleavedBatch::<V>::new(&pairs, &encoder).unwrap();

        assert_eq!(batch.outer().len(), 3);
        assert_eq!(batch.inner().len(), 3);
        assert_eq!(batch.outer()[0], Lanes([0, -1, 0, -1]));
        assert_eq!(batch.outer()[1], Lanes([1, -1, -1, -1]));
        assert_eq!(batch.inner()[0], Lanes([-2, -2, 2, -2]));
        assert_eq!(batch.inner()[2], Lanes([3, -2, 0, -2]));

        assert_eq!(batch.offset(0), 2);
        assert_eq!(batch.offset(1), 3);
        assert_eq!(batch.offset(2), 0);
        assert_eq!(batch.outer_length(0), 3);
        assert!(batch.is_valid(2));
        assert!(!batch.is_valid(3));
    }

    #[test]
    fn test_empty_batch() {
        let pairs: [Option<(&str, &str)>; 2] = [None, None];
        assert!(matches!(
            InterleavedBatch::<V>::new(&pairs, &RankEncoder::dna()),
            Err(Error::EmptyBatch)
        ));
    }

    #[test]
    fn test_batch_too_large() {
        let pairs = vec![Some(("A", "A")); 5];
        assert!(matches!(
            InterleavedBatch::<V>::new(&pairs, &RankEncoder::dna()),
            Err(Error::BatchTooLarge { len: 5, lanes: 4 })
        ));
    }

    #[test]
    fn test_alphabet_too_large() {
        let pairs = [Some(("A", "A"))];
        assert!(matches!(
            InterleavedBatch::<Lanes<i8, 4>>::new(&pairs, &RankEncoder::identity()),
            Err(Error::AlphabetTooLarge {
                symbols: 256,
                bytes: 1
            })
        ));
    }

    #[test]
    fn test_column_border_offsets_padding() {
        let pairs = [Some(("A", "A")), Some(("A", "AAA"))];
        let batch = InterleavedBatch::<V>::new(&pairs, &RankEncoder::dna()).unwrap();
        let gap = AffineGapModel::<V>::new(-10, -1);

        let border = batch.column_border(&gap, InitRule::Regular, 1);
        let lane = |k: usize| border.iter().map(|cell| cell.current.lane(k)).collect::<Vec<_>>();
        assert_eq!(lane(0), vec![0, 1, 2, -9]);
        assert_eq!(lane(1), vec![0, -11, -12, -13]);
        assert_eq!(border[3].left.lane(0), -20);

        let free = batch.column_border(&gap, InitRule::Zero, 1);
        assert_eq!(free.last().current, Lanes([2, 0, 3, 3]));
        assert_eq!(free.last().up, Lanes([-9, -11, -8, -8]));
    }

    #[test]
    fn test_column_border_keeps_saturation() {
        let inner = "A".repeat(120);
        let pairs = [Some(("A", "A")), Some(("A", inner.as_str()))];
        let batch = InterleavedBatch::<Lanes<i8, 2>>::new(&pairs, &RankEncoder::dna()).unwrap();
        let gap = AffineGapModel::<Lanes<i8, 2>>::new(-10, -1);

        let border = batch.column_border(&gap, InitRule::Regular, 1);
        assert_eq!(border.last().current, Lanes([108, i8::MIN]));
        assert_eq!(border[117].current.lane(1), -127);
        assert_eq!(border[118].current.lane(1), i8::MIN);
    }
}
