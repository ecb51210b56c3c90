//! Linear-space DP storage. Only two borders of the matrix are ever materialised: a column
//! vector along the inner sequence and a row vector along the outer sequence.

mod cell;
mod vector;

pub use cell::DpCell;
pub use vector::{DpVector, InitRule};
