//! Grid placement.
//!
//! Two independent paths seat selected tracks into the 3x9 grid:
//!
//! - [`place_strict`]: randomized, load-balanced placement. A single attempt
//!   either returns a complete grid that satisfies the row and full column
//!   rules or returns `None`; it never hands back a partial grid.
//! - [`place_fallback`]: deterministic greedy placement used after the
//!   randomized path has been exhausted. It is only guaranteed to succeed for
//!   [`FALLBACK_COLUMN_COUNTS`](crate::distribution::FALLBACK_COLUMN_COUNTS).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ticket::{ColumnTracks, Grid, COLS, ITEMS_PER_ROW, ITEMS_PER_TICKET, ROWS};
use crate::track::Track;

/// Attempts a randomized placement of `tracks_per_column`.
///
/// Placements are shuffled, then stably sorted so tracks of fuller columns go
/// first. Each track goes to a free row of its column that is below
/// capacity, chosen uniformly among the least-filled such rows.
///
/// Returns `None` if the total is not [`ITEMS_PER_TICKET`], if some track
/// finds no free row, or if the finished grid breaks the row or full column
/// rules.
pub fn place_strict<R: Rng + ?Sized>(
    tracks_per_column: &ColumnTracks,
    rng: &mut R,
) -> Option<Grid> {
    let counts: [usize; COLS] = std::array::from_fn(|col| tracks_per_column[col].len());

    let mut placements: Vec<(usize, &Track)> = tracks_per_column
        .iter()
        .enumerate()
        .flat_map(|(col, tracks)| tracks.iter().map(move |track| (col, track)))
        .collect();
    if placements.len() != ITEMS_PER_TICKET {
        return None;
    }

    placements.shuffle(rng);
    placements.sort_by(|a, b| counts[b.0].cmp(&counts[a.0]));

    let mut grid = Grid::default();
    let mut row_fill = [0usize; ROWS];

    for (col, track) in placements {
        let open: Vec<usize> = (0..ROWS)
            .filter(|&row| grid[row][col].is_none() && row_fill[row] < ITEMS_PER_ROW)
            .collect();
        let min_fill = open.iter().map(|&row| row_fill[row]).min()?;
        let candidates: Vec<usize> = open
            .into_iter()
            .filter(|&row| row_fill[row] == min_fill)
            .collect();
        let row = *candidates.choose(rng)?;

        grid[row][col] = Some(track.clone());
        row_fill[row] += 1;
    }

    if row_fill.iter().any(|&fill| fill != ITEMS_PER_ROW) {
        return None;
    }
    if full_columns(&grid) > 1 {
        return None;
    }

    Some(grid)
}

/// Places tracks greedily without randomness.
///
/// Columns are visited by descending track count (ties keep column order);
/// each track takes the first least-filled free row of its column. Tracks
/// that find no free row are dropped, so the result is only as complete as
/// the input allows.
pub fn place_fallback(tracks_per_column: &ColumnTracks) -> Grid {
    let mut order: Vec<usize> = (0..COLS).collect();
    order.sort_by(|&a, &b| tracks_per_column[b].len().cmp(&tracks_per_column[a].len()));

    let mut grid = Grid::default();
    let mut row_fill = [0usize; ROWS];

    for col in order {
        for track in &tracks_per_column[col] {
            let best = (0..ROWS)
                .filter(|&row| grid[row][col].is_none() && row_fill[row] < ITEMS_PER_ROW)
                .min_by_key(|&row| row_fill[row]);
            if let Some(row) = best {
                grid[row][col] = Some(track.clone());
                row_fill[row] += 1;
            }
        }
    }

    grid
}

fn full_columns(grid: &Grid) -> usize {
    (0..COLS)
        .filter(|&col| grid.iter().all(|row| row[col].is_some()))
        .count()
}
