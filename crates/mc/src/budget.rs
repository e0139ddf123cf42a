//! Per-candidate time budgeting.

use std::time::Duration;

/// Time each candidate cell gets this turn.
///
/// The remaining game clock is split evenly over the turns still to play,
/// then evenly over the candidate cells of this turn. Both divisors are
/// clamped to at least 1, so the result is always defined; durations
/// cannot go negative, so neither can the slice.
///
/// The last turn is still counted as a turn even though it is forced,
/// which leaves a small margin on the game clock.
pub fn time_slice(remaining: Duration, remaining_turns: usize, remaining_cells: usize) -> Duration {
    let per_turn = remaining / divisor(remaining_turns);
    per_turn / divisor(remaining_cells)
}

fn divisor(n: usize) -> u32 {
    u32::try_from(n.max(1)).unwrap_or(u32::MAX)
}
