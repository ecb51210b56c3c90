//! Aligners. [`Aligner`] sweeps one pair with scalar scores, [`BatchAligner`] sweeps one pair
//! per lane of a lane vector.

mod batch;
mod deferred;
#[cfg(feature = "parallel")]
mod parallel;
mod scalar;

pub use batch::{BatchAligner, BatchResult};
pub use deferred::{Deferred, DeferredFuture};
pub use scalar::{AlignResult, Aligner, configure};
