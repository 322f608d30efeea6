//! Independent ticket validation.
//!
//! The validator re-derives every invariant straight from the cell grid and
//! shares no code with generation, so it can serve as an external check on
//! any ticket, including ones loaded from disk:
//!
//! - exactly five filled cells per row
//! - no track id twice on a ticket
//! - at most one column with all three rows filled
//! - every track sits in the column whose id range contains it
//! - every cell's stored `row`/`col` matches its grid position
//!
//! Validation is pure: no randomness, no state, the same ticket always gives
//! the same result.

mod types;

#[cfg(test)]
mod tests;

use std::collections::{BTreeSet, HashSet};

pub use types::{
    ColumnMismatch, CoordinateMismatch, RowCount, TicketValidationErrors, TicketValidationResult,
    ValidationSummary,
};

use crate::ticket::{Ticket, COLS, ITEMS_PER_ROW, ROWS};
use crate::track::{TrackId, COLUMN_RANGES};

/// Validates one ticket.
pub fn validate_ticket(ticket: &Ticket) -> TicketValidationResult {
    let mut errors = TicketValidationErrors::default();

    for (row, cells) in ticket.cells.iter().enumerate() {
        let count = cells.iter().filter(|cell| cell.track.is_some()).count();
        if count != ITEMS_PER_ROW {
            errors.invalid_row_counts.push(RowCount { row, count });
        }
    }

    let mut seen: HashSet<TrackId> = HashSet::new();
    let mut duplicates: BTreeSet<TrackId> = BTreeSet::new();
    for cells in &ticket.cells {
        for track in cells.iter().filter_map(|cell| cell.track.as_ref()) {
            if !seen.insert(track.id) {
                duplicates.insert(track.id);
            }
        }
    }
    errors.duplicate_tracks = duplicates.into_iter().collect();

    for col in 0..COLS {
        if (0..ROWS).all(|row| ticket.cells[row][col].track.is_some()) {
            errors.full_columns_count += 1;
        }
    }
    errors.full_columns_exceeded = errors.full_columns_count > 1;

    for (row, cells) in ticket.cells.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if (cell.row, cell.col) != (row, col) {
                errors.coordinate_mismatches.push(CoordinateMismatch {
                    row,
                    col,
                    stored_row: cell.row,
                    stored_col: cell.col,
                });
            }
            let Some(track) = &cell.track else {
                continue;
            };
            let expected_col = range_column(track.id);
            if expected_col != Some(col) {
                errors.column_mismatches.push(ColumnMismatch {
                    row,
                    col,
                    track_id: track.id,
                    expected_col,
                });
            }
        }
    }

    TicketValidationResult {
        is_valid: errors.is_empty(),
        ticket_id: ticket.id.clone(),
        errors,
    }
}

/// Validates a batch and keeps the details of failing tickets.
pub fn validate_tickets(tickets: &[Ticket]) -> ValidationSummary {
    let results: Vec<TicketValidationResult> = tickets.iter().map(validate_ticket).collect();
    let valid_tickets = results.iter().filter(|r| r.is_valid).count();
    let invalid_details: Vec<TicketValidationResult> =
        results.into_iter().filter(|r| !r.is_valid).collect();

    ValidationSummary {
        total_tickets: tickets.len(),
        valid_tickets,
        invalid_tickets: invalid_details.len(),
        invalid_details,
    }
}

/// Column lookup kept local to the validator.
fn range_column(id: TrackId) -> Option<usize> {
    COLUMN_RANGES
        .iter()
        .position(|&(min, max)| id >= min && id <= max)
}
