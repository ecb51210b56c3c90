pub const MATCH_SCORE: i32 = 4;
pub const MISMATCH_SCORE: i32 = -5;

/// Charged once when a gap opens
pub const GAP_OPEN_SCORE: i32 = -10;
/// Charged for every gap position
pub const GAP_EXTENSION_SCORE: i32 = -1;

/// Score added per padded inner position of a batched lane, removed again after the sweep
pub const PADDING_SCORE: i32 = 1;
