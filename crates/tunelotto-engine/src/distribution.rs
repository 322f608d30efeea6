//! Column count templates.
//!
//! A column distribution says how many cells of each column a ticket fills.
//! Distributions come from a small table of hand-checked templates rather
//! than from search; a random template is drawn and its values are shuffled
//! across column positions.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ticket::{COLS, ITEMS_PER_ROW, ITEMS_PER_TICKET, ROWS};

/// Filled cell count per column.
pub type ColumnCounts = [usize; COLS];

/// Template used when every randomized attempt failed.
///
/// Greedy least-filled-row placement of this template, fullest columns
/// first, always ends with five cells per row and no full column.
pub const FALLBACK_COLUMN_COUNTS: ColumnCounts = [2, 2, 2, 1, 2, 2, 2, 1, 1];

/// Row-satisfiable column templates (sum 15, values 0..=3, at most one 3).
pub const COLUMN_TEMPLATES: [ColumnCounts; 20] = [
    [2, 2, 2, 1, 2, 2, 2, 1, 1],
    [2, 2, 1, 2, 2, 1, 2, 2, 1],
    [1, 2, 2, 2, 1, 2, 2, 2, 1],
    [2, 1, 2, 2, 2, 1, 2, 2, 1],
    [2, 2, 2, 2, 1, 1, 2, 2, 1],
    [1, 2, 2, 2, 2, 1, 2, 2, 1],
    [2, 1, 2, 2, 2, 2, 1, 2, 1],
    [2, 2, 1, 2, 2, 2, 1, 2, 1],
    [1, 2, 2, 1, 2, 2, 2, 2, 1],
    [2, 2, 2, 1, 2, 1, 2, 2, 1],
    [2, 1, 2, 2, 1, 2, 2, 2, 1],
    [1, 2, 2, 2, 2, 2, 1, 2, 1],
    [2, 2, 1, 2, 1, 2, 2, 2, 1],
    [2, 2, 2, 2, 2, 1, 1, 2, 1],
    [1, 2, 1, 2, 2, 2, 2, 2, 1],
    [2, 1, 2, 1, 2, 2, 2, 2, 1],
    // one full column
    [3, 2, 1, 2, 1, 2, 2, 1, 1],
    [2, 3, 1, 2, 1, 2, 1, 2, 1],
    [1, 2, 3, 1, 2, 2, 2, 1, 1],
    [2, 1, 2, 3, 1, 2, 1, 2, 1],
];

/// Draws a template uniformly and shuffles it across column positions.
pub fn random_column_counts<R: Rng + ?Sized>(rng: &mut R) -> ColumnCounts {
    let mut counts = COLUMN_TEMPLATES[rng.gen_range(0..COLUMN_TEMPLATES.len())];
    counts.shuffle(rng);
    counts
}

/// Returns true if `counts` can be seated as a valid ticket.
///
/// Checks the totals, the per-column bound, the single full column rule and
/// the Gale-Ryser condition for a 0/1 matrix with row sums of
/// [`ITEMS_PER_ROW`]: for every `k` rows, `sum(min(c, k)) >= k * 5`.
pub fn is_row_satisfiable(counts: &ColumnCounts) -> bool {
    if counts.iter().sum::<usize>() != ITEMS_PER_TICKET {
        return false;
    }
    if counts.iter().any(|&c| c > ROWS) {
        return false;
    }
    if counts.iter().filter(|&&c| c == ROWS).count() > 1 {
        return false;
    }
    (1..=ROWS).all(|k| counts.iter().map(|&c| c.min(k)).sum::<usize>() >= k * ITEMS_PER_ROW)
}
