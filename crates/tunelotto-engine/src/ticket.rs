//! Ticket and grid types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::track::{Track, TrackId};

/// Rows per ticket.
pub const ROWS: usize = 3;

/// Columns per ticket.
pub const COLS: usize = 9;

/// Filled cells required in every row.
pub const ITEMS_PER_ROW: usize = 5;

/// Filled cells per ticket.
pub const ITEMS_PER_TICKET: usize = ROWS * ITEMS_PER_ROW;

/// Raw placement result: `grid[row][col]`.
pub type Grid = [[Option<Track>; COLS]; ROWS];

/// Tracks selected for each column, before placement.
pub type ColumnTracks = [Vec<Track>; COLS];

/// Formats the stable ticket id for a sequence number (`TICKET-0001`).
pub fn ticket_id(sequence: u32) -> String {
    format!("TICKET-{:04}", sequence)
}

/// One cell of a ticket grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCell {
    /// The placed track, or `None` for an empty cell.
    pub track: Option<Track>,
    /// Row index (0..3).
    pub row: usize,
    /// Column index (0..9).
    pub col: usize,
}

/// A generated bingo card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Stable identifier derived from the sequence number.
    pub id: String,
    /// `cells[row][col]`.
    pub cells: [[TicketCell; COLS]; ROWS],
}

impl Ticket {
    /// Wraps a placement grid into a ticket.
    pub fn from_grid(id: impl Into<String>, grid: Grid) -> Self {
        let mut rows = grid.into_iter();
        let cells = std::array::from_fn(|row| {
            let mut tracks = rows.next().unwrap_or_default().into_iter();
            std::array::from_fn(|col| TicketCell {
                track: tracks.next().flatten(),
                row,
                col,
            })
        });
        Self {
            id: id.into(),
            cells,
        }
    }

    /// Returns an empty ticket.
    pub fn empty(id: impl Into<String>) -> Self {
        Self::from_grid(id, Grid::default())
    }

    /// Returns the track at a position, if any.
    pub fn track_at(&self, row: usize, col: usize) -> Option<&Track> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|cell| cell.track.as_ref())
    }

    /// Iterates over filled cells in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = &TicketCell> + '_ {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.track.is_some())
    }

    /// Iterates over the ids of placed tracks.
    pub fn track_ids(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.filled_cells()
            .filter_map(|cell| cell.track.as_ref().map(|t| t.id))
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// Number of filled cells in a row.
    pub fn row_fill(&self, row: usize) -> usize {
        self.cells[row].iter().filter(|c| c.track.is_some()).count()
    }

    /// Number of filled cells in a column.
    pub fn column_fill(&self, col: usize) -> usize {
        self.cells
            .iter()
            .filter(|row| row[col].track.is_some())
            .count()
    }

    /// Number of columns with every row filled.
    pub fn full_columns(&self) -> usize {
        (0..COLS).filter(|&col| self.column_fill(col) == ROWS).count()
    }

    /// Returns true if any track id appears more than once.
    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::new();
        self.track_ids().any(|id| !seen.insert(id))
    }

    /// Returns a copy of this ticket with the given cells replaced.
    ///
    /// Each replacement is `(row, col, track)`; out-of-range positions are ignored.
    pub fn with_replacements(&self, replacements: &[(usize, usize, Track)]) -> Ticket {
        let mut ticket = self.clone();
        for (row, col, track) in replacements {
            if let Some(cell) = ticket.cells.get_mut(*row).and_then(|r| r.get_mut(*col)) {
                cell.track = Some(track.clone());
            }
        }
        ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        let mut grid = Grid::default();
        grid[0][0] = Some(Track::new(1, "One"));
        grid[1][0] = Some(Track::new(2, "Two"));
        grid[2][0] = Some(Track::new(3, "Three"));
        grid[0][4] = Some(Track::new(44, "Forty-four"));
        grid
    }

    #[test]
    fn test_ticket_id_format() {
        assert_eq!(ticket_id(1), "TICKET-0001");
        assert_eq!(ticket_id(42), "TICKET-0042");
        assert_eq!(ticket_id(12345), "TICKET-12345");
    }

    #[test]
    fn test_from_grid_sets_coordinates() {
        let ticket = Ticket::from_grid("T", sample_grid());
        for (r, row) in ticket.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                assert_eq!((cell.row, cell.col), (r, c));
            }
        }
        assert_eq!(ticket.track_at(0, 4).map(|t| t.id), Some(44));
        assert!(ticket.track_at(1, 4).is_none());
        assert!(ticket.track_at(5, 0).is_none());
    }

    #[test]
    fn test_fill_counts() {
        let ticket = Ticket::from_grid("T", sample_grid());
        assert_eq!(ticket.filled_count(), 4);
        assert_eq!(ticket.row_fill(0), 2);
        assert_eq!(ticket.row_fill(2), 1);
        assert_eq!(ticket.column_fill(0), 3);
        assert_eq!(ticket.full_columns(), 1);
        assert!(!ticket.has_duplicates());
    }

    #[test]
    fn test_with_replacements_leaves_original() {
        let ticket = Ticket::from_grid("T", sample_grid());
        let replaced = ticket.with_replacements(&[(0, 0, Track::new(2, "Two"))]);
        assert_eq!(ticket.track_at(0, 0).map(|t| t.id), Some(1));
        assert_eq!(replaced.track_at(0, 0).map(|t| t.id), Some(2));
        assert!(replaced.has_duplicates());
    }

    #[test]
    fn test_ticket_json_shape() {
        let ticket = Ticket::empty("TICKET-0007");
        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["id"], "TICKET-0007");
        assert_eq!(json["cells"].as_array().map(Vec::len), Some(ROWS));
        assert_eq!(json["cells"][0].as_array().map(Vec::len), Some(COLS));
        let back: Ticket = serde_json::from_value(json).unwrap();
        assert_eq!(back, ticket);
    }
}
