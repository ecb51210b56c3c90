//! Maps alphabet symbols to dense integer ranks so substitution scores become O(1) table
//! lookups. A table is built once per alphabet and shared read-only between aligners.

use std::sync::{Arc, LazyLock};

use itertools::Itertools;
use multiversion::multiversion;

/// Rank of a symbol that was never registered
pub const UNKNOWN_RANK: i16 = -1;

const DNA: &[u8] = b"ACGT";
const PROTEIN: &[u8] = b"ARNDCQEGHILKMFPSTWYVBZX*";

static IDENTITY: LazyLock<RankEncoder> =
    LazyLock::new(|| RankEncoder::new((0..=255).collect::<Vec<u8>>(), 1));

#[derive(Debug, PartialEq, Eq)]
struct RankTable {
    ranks: [i16; 256],
    symbols: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEncoder {
    table: Arc<RankTable>,
    scale: i32,
}

impl RankEncoder {
    /// Builds the rank table for `symbols`, in order. Repeated symbols keep their first rank.
    pub fn new(symbols: impl AsRef<[u8]>, scale: i32) -> Self {
        let mut ranks = [UNKNOWN_RANK; 256];
        let mut registered = Vec::new();
        for &symbol in symbols.as_ref() {
            if ranks[symbol as usize] == UNKNOWN_RANK {
                ranks[symbol as usize] = registered.len() as i16;
                registered.push(symbol);
            }
        }

        Self {
            table: Arc::new(RankTable {
                ranks,
                symbols: registered,
            }),
            scale,
        }
    }

    /// Every byte is its own rank. The table is built once and shared by every caller.
    pub fn identity() -> Self {
        IDENTITY.clone()
    }

    pub fn dna() -> Self {
        Self::new(DNA, 1)
    }

    pub fn protein() -> Self {
        Self::new(PROTEIN, 1)
    }

    /// Dense alphabet of every distinct byte found in `sequences`, ordered by byte value
    pub fn from_sequences<I, S>(sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut seen = [false; 256];
        for sequence in sequences {
            for &symbol in sequence.as_ref() {
                seen[symbol as usize] = true;
            }
        }
        let symbols = seen.iter().positions(|&seen| seen).map(|b| b as u8);
        Self::new(symbols.collect::<Vec<_>>(), 1)
    }

    /// Same table, different multiplier. The table itself is shared, not copied.
    pub fn with_scale(&self, scale: i32) -> Self {
        Self {
            table: Arc::clone(&self.table),
            scale,
        }
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Number of registered symbols
    pub fn len(&self) -> usize {
        self.table.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[u8] {
        &self.table.symbols
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.table.ranks[symbol as usize] != UNKNOWN_RANK
    }

    /// Raw rank, [`UNKNOWN_RANK`] for unregistered symbols
    #[inline(always)]
    pub fn rank(&self, symbol: u8) -> i16 {
        self.table.ranks[symbol as usize]
    }

    /// `rank * scale`. Callers must only pass symbols of the alphabet.
    #[inline(always)]
    pub fn encode(&self, symbol: u8) -> i32 {
        let rank = self.rank(symbol);
        assert!(
            rank != UNKNOWN_RANK,
            "symbol {:?} is not part of the alphabet",
            symbol as char
        );
        rank as i32 * self.scale
    }

    /// Encodes a whole sequence. Panics like [`RankEncoder::encode`] on unregistered symbols.
    pub fn encode_all(&self, sequence: &[u8]) -> Vec<i32> {
        let mut encoded = vec![0; sequence.len()];
        if !encode_into(&self.table.ranks, self.scale, sequence, &mut encoded) {
            let symbol = sequence
                .iter()
                .find(|&&symbol| !self.contains(symbol))
                .copied()
                .unwrap_or_default();
            panic!("symbol {:?} is not part of the alphabet", symbol as char);
        }
        encoded
    }
}

/// Returns false when any symbol was unknown
#[multiversion(targets = "simd")]
fn encode_into(ranks: &[i16; 256], scale: i32, symbols: &[u8], out: &mut [i32]) -> bool {
    let mut all_known = true;
    for (slot, &symbol) in out.iter_mut().zip(symbols) {
        let rank = ranks[symbol as usize];
        all_known &= rank != UNKNOWN_RANK;
        *slot = rank as i32 * scale;
    }
    all_known
}
