use crate::score::Score;

/// Working state of one DP cell.
///
/// After the recurrence has processed cell (i, j):
/// - `current` is the best score of an alignment ending at (i, j)
/// - `diagonal` is the previous `current`, needed by the diagonal successor
/// - `up` is the best open-or-extend score of a vertical gap entering (i + 1, j)
/// - `left` is the best open-or-extend score of a horizontal gap entering (i, j + 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DpCell<S> {
    pub current: S,
    pub diagonal: S,
    pub up: S,
    pub left: S,
}

impl<S: Score> DpCell<S> {
    /// Border cell holding `current` with `gap` as the score of a gap opened from it
    #[inline(always)]
    pub fn border(current: S, gap: S) -> Self {
        Self {
            current,
            diagonal: current,
            up: gap,
            left: gap,
        }
    }

    #[inline(always)]
    pub fn splat(value: S) -> Self {
        Self::border(value, value)
    }

    /// Shifts every field down by `bias`, saturating at the lowest score
    #[inline(always)]
    pub fn rebias(&mut self, bias: S) {
        self.current = self.current.sub(bias);
        self.diagonal = self.diagonal.sub(bias);
        self.up = self.up.sub(bias);
        self.left = self.left.sub(bias);
    }
}
