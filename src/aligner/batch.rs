use std::marker::PhantomData;

use super::Deferred;
use crate::config::{Config, EndGaps, Method};
use crate::error::{Error, Result};
use crate::gap_model::{AffineGapModel, LocalGapModel};
use crate::interleave::InterleavedBatch;
use crate::matrix::{DpVector, InitRule};
use crate::r#const::PADDING_SCORE;
use crate::recursion::{compute_column, sweep};
use crate::score::{Score, ScoreScalar};
use crate::score_model::{LaneScoreModel, LocalScoreModel, Profile, Scoreable};
use crate::simd::{LaneVector, Lanes, SUPPORTED_LANE_COUNTS, lane_width, with_lane_count};
use crate::tracker::{LaneGlobalTracker, SaturatedLocalTracker, Trackable};

/// Scores of one batch, one entry per lane. Padding slots have no score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    scores: Vec<Option<i64>>,
}

impl BatchResult {
    pub fn new(scores: Vec<Option<i64>>) -> Self {
        Self { scores }
    }

    pub fn score(&self, lane: usize) -> Option<i64> {
        self.scores.get(lane).copied().flatten()
    }

    pub fn scores(&self) -> &[Option<i64>] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<i64>> + '_ {
        self.scores.iter().copied()
    }

    /// Scores of the lanes that held a pair, in lane order
    pub fn valid_scores(&self) -> impl Iterator<Item = i64> + '_ {
        self.scores.iter().flatten().copied()
    }
}

/// Aligns up to one lane vector worth of pairs at once, each lane holding scores of type `T`.
///
/// The lane count is detected from the CPU on construction, see [`lane_width`]. Scores are
/// returned widened to `i64`. Local alignments rebias narrow lanes while sweeping and can report
/// local scores beyond the range of `T`; global alignments fail with
/// [`Error::ScoreOverflow`] when a score saturates.
#[derive(Debug, Clone)]
pub struct BatchAligner<T = i16> {
    config: Config,
    lanes: usize,
    padding: i64,
    _score: PhantomData<T>,
}

impl<T: ScoreScalar> BatchAligner<T> {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let lanes = lane_width::<T>();
        log::debug!(
            "batched {} alignment with {} scoring over {} lanes",
            config.method,
            config.score_model.kind(),
            lanes
        );
        Ok(Self {
            config,
            lanes,
            padding: PADDING_SCORE as i64,
            _score: PhantomData,
        })
    }

    /// Overrides the detected lane count
    pub fn with_lanes(mut self, lanes: usize) -> Result<Self> {
        if !SUPPORTED_LANE_COUNTS.contains(&lanes) {
            return Err(Error::UnsupportedLaneCount(lanes));
        }
        self.lanes = lanes;
        Ok(self)
    }

    pub fn lanes(&self) -> usize {
        self.lanes
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Aligns every `(seq1, seq2)` pair in its own lane. `None` entries are padding slots.
    pub fn compute<A, B>(&self, pairs: &[Option<(A, B)>]) -> Result<BatchResult>
    where
        A: AsRef<[u8]>,
        B: AsRef<[u8]>,
    {
        with_lane_count!(self.lanes, N => self.compute_lanes::<N, A, B>(pairs))
    }

    /// Aligns one `seq1` against every `seqs2` entry through a precomputed [`Profile`]
    pub fn compute_one_to_many<A, B>(&self, seq1: A, seqs2: &[Option<B>]) -> Result<BatchResult>
    where
        A: AsRef<[u8]>,
        B: AsRef<[u8]>,
    {
        let seq1 = seq1.as_ref();
        with_lane_count!(self.lanes, N => self.one_to_many_lanes::<N, B>(seq1, seqs2))
    }

    /// Aligns any number of pairs, one batch after another
    pub fn compute_all<A, B>(&self, pairs: &[(A, B)]) -> Result<Vec<i64>>
    where
        A: AsRef<[u8]>,
        B: AsRef<[u8]>,
    {
        let mut scores = Vec::with_capacity(pairs.len());
        for chunk in pairs.chunks(self.lanes) {
            scores.extend(self.compute_chunk(chunk)?);
        }
        Ok(scores)
    }

    pub fn defer<A, B>(
        &self,
        pairs: Vec<Option<(A, B)>>,
    ) -> Deferred<impl FnOnce() -> Result<BatchResult>>
    where
        A: AsRef<[u8]>,
        B: AsRef<[u8]>,
    {
        let aligner = self.clone();
        Deferred::new(move || aligner.compute(&pairs))
    }

    pub(super) fn compute_chunk<A, B>(&self, chunk: &[(A, B)]) -> Result<Vec<i64>>
    where
        A: AsRef<[u8]>,
        B: AsRef<[u8]>,
    {
        let pairs = chunk
            .iter()
            .map(|(a, b)| Some((a.as_ref(), b.as_ref())))
            .collect::<Vec<_>>();
        Ok(self.compute(&pairs)?.valid_scores().collect())
    }

    fn compute_lanes<const N: usize, A, B>(
        &self,
        pairs: &[Option<(A, B)>],
    ) -> Result<BatchResult>
    where
        A: AsRef<[u8]>,
        B: AsRef<[u8]>,
    {
        let score_model = &self.config.score_model;
        let encoder = score_model.batch_encoder(
            pairs
                .iter()
                .flatten()
                .flat_map(|(a, b)| [a.as_ref(), b.as_ref()]),
        );
        let batch = InterleavedBatch::<Lanes<T, N>>::new(pairs, &encoder)?;

        match self.config.method {
            Method::Global(end_gaps) => {
                let padding = self.inner_padding(end_gaps);
                let model = LaneScoreModel::<Lanes<T, N>>::new(score_model, padding, T::MIN);
                self.global(&model, &batch, batch.outer(), batch.inner(), end_gaps)
            }
            Method::Local => {
                let model = LaneScoreModel::<Lanes<T, N>>::new(score_model, T::MIN, T::MIN);
                self.local(LocalScoreModel::new(model), &batch, batch.outer(), batch.inner())
            }
        }
    }

    fn one_to_many_lanes<const N: usize, B>(
        &self,
        seq1: &[u8],
        seqs2: &[Option<B>],
    ) -> Result<BatchResult>
    where
        B: AsRef<[u8]>,
    {
        let score_model = &self.config.score_model;
        let encoder = score_model.batch_encoder(
            std::iter::once(seq1).chain(seqs2.iter().flatten().map(|seq2| seq2.as_ref())),
        );
        let pairs = seqs2
            .iter()
            .map(|seq2| seq2.as_ref().map(|seq2| (seq1, seq2.as_ref())))
            .collect::<Vec<_>>();
        let batch = InterleavedBatch::<Lanes<T, N>>::new(&pairs, &encoder)?;
        let outer = encoder
            .with_scale(1)
            .encode_all(seq1)
            .into_iter()
            .map(|rank| rank as usize)
            .collect::<Vec<_>>();

        match self.config.method {
            Method::Global(end_gaps) => {
                let padding = self.inner_padding(end_gaps);
                let model = LaneScoreModel::<Lanes<T, N>>::new(score_model, padding, T::MIN);
                let profile = Profile::new(&model, encoder.len(), batch.inner());
                self.global(&profile, &batch, &outer, &profile.positions(), end_gaps)
            }
            Method::Local => {
                let model = LaneScoreModel::<Lanes<T, N>>::new(score_model, T::MIN, T::MIN);
                let profile = Profile::new(&model, encoder.len(), batch.inner());
                let positions = profile.positions();
                self.local(LocalScoreModel::new(profile), &batch, &outer, &positions)
            }
        }
    }

    /// Padded inner rows carry the padding score along the diagonal when the top border is
    /// free, otherwise they are only reachable through the column border
    fn inner_padding(&self, end_gaps: EndGaps) -> T {
        if end_gaps.seq1_leading.is_free() {
            T::from_i64(self.padding)
        } else {
            T::MIN
        }
    }

    fn gap<const N: usize>(&self) -> AffineGapModel<Lanes<T, N>> {
        self.config.gap_model.cast()
    }

    fn global<const N: usize, M>(
        &self,
        model: &M,
        batch: &InterleavedBatch<Lanes<T, N>>,
        outer: &[M::Outer],
        inner: &[M::Inner],
        end_gaps: EndGaps,
    ) -> Result<BatchResult>
    where
        M: Scoreable<Lanes<T, N>>,
    {
        if let Some(lane) = (0..N).find(|&lane| {
            batch.is_valid(lane) && self.padding * batch.offset(lane) as i64 >= T::MAX.to_i64()
        }) {
            return Err(Error::ScoreOverflow { lane });
        }

        let gap = self.gap::<N>();
        let mut column =
            batch.column_border(&gap, end_gaps.seq2_leading.init_rule(), self.padding);
        let row = DpVector::new(outer.len(), end_gaps.seq1_leading.init_rule(), &gap);

        let mut tracker = LaneGlobalTracker::new(
            batch,
            self.padding,
            end_gaps.seq1_trailing.is_free(),
            end_gaps.seq2_trailing.is_free(),
        );
        sweep(model, &gap, outer, inner, &mut column, &row, &mut tracker);

        if let Some(lane) = tracker.saturated_lane() {
            return Err(Error::ScoreOverflow { lane });
        }
        Ok(BatchResult::new(tracker.max_score()))
    }

    fn local<const N: usize, M>(
        &self,
        mut model: LocalScoreModel<M, Lanes<T, N>>,
        batch: &InterleavedBatch<Lanes<T, N>>,
        outer: &[M::Outer],
        inner: &[M::Inner],
    ) -> Result<BatchResult>
    where
        M: Scoreable<Lanes<T, N>>,
    {
        // a column can raise the maximum by at most one substitution
        let max_gain = self.config.score_model.max_score().max(0) as i64;
        let limit = T::from_i64(T::MAX.to_i64() - 1 - max_gain);

        let mut gap = LocalGapModel::new(self.gap::<N>());
        let mut column = DpVector::new(inner.len(), InitRule::Zero, &gap);
        let mut tracker = SaturatedLocalTracker::new();

        tracker.track_column(0, &column);
        for (j, &symbol) in outer.iter().enumerate() {
            compute_column(&model, &gap, symbol, inner, gap.border(), &mut column, &mut tracker);
            tracker.track_column(j + 1, &column);

            if tracker.exceeds(limit) {
                let bias = tracker.rebias_amount();
                tracker.fold_block();
                tracker.rebias(bias);
                gap.rebias(bias);
                model.rebias(bias);
                column.rebias(bias);
                log::trace!("rebiased lanes by {:?} after column {}", bias.to_array(), j + 1);

                let column_max = column.max_current();
                if let Some(lane) = (0..N).find(|&lane| column_max.lane(lane) > limit) {
                    return Err(Error::ScoreOverflow { lane });
                }
            }
        }

        let scores = tracker.max_score();
        Ok(BatchResult::new(
            (0..N)
                .map(|lane| batch.is_valid(lane).then(|| scores[lane]))
                .collect(),
        ))
    }
}
