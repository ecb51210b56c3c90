use rayon::prelude::*;

use super::BatchAligner;
use crate::error::Result;
use crate::score::ScoreScalar;

impl<T: ScoreScalar> BatchAligner<T> {
    /// [`BatchAligner::compute_all`] with batches spread over the rayon thread pool. Scores are
    /// returned in the order of `pairs`.
    pub fn par_compute_all<A, B>(&self, pairs: &[(A, B)]) -> Result<Vec<i64>>
    where
        A: AsRef<[u8]> + Sync,
        B: AsRef<[u8]> + Sync,
    {
        let batches = pairs
            .par_chunks(self.lanes())
            .map(|chunk| self.compute_chunk(chunk))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("aligned {} pairs in {} batches", pairs.len(), batches.len());
        Ok(batches.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::aligner::BatchAligner;
    use crate::config::{Config, Method};
    use crate::error::Error;

    #[test]
    fn test_matches_sequential() {
        let config = Config {
            method: Method::Local,
            ..Config::default()
        };
        let batch = BatchAligner::<i16>::new(config).unwrap().with_lanes(4).unwrap();
        let pairs = (0..37)
            .map(|i| ("ACGTTGCA".repeat(i % 5 + 1), "TGCA".repeat(i % 7 + 1)))
            .collect::<Vec<_>>();
        assert_eq!(
            batch.par_compute_all(&pairs).unwrap(),
            batch.compute_all(&pairs).unwrap()
        );
    }

    #[test]
    fn test_propagates_overflow() {
        let batch = BatchAligner::<i8>::new(Config::default())
            .unwrap()
            .with_lanes(2)
            .unwrap();
        let long = "A".repeat(50);
        let pairs = vec![("A", "A"); 6]
            .into_iter()
            .chain([(long.as_str(), long.as_str())])
            .collect::<Vec<_>>();
        assert!(matches!(
            batch.par_compute_all(&pairs),
            Err(Error::ScoreOverflow { .. })
        ));
    }
}
