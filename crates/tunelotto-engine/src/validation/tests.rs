//! Tests for the ticket validator.

use super::*;
use crate::ticket::{ticket_id, Grid};
use crate::track::Track;
use pretty_assertions::assert_eq;

/// Builds a valid ticket by hand.
///
/// Column counts are [2, 2, 2, 2, 2, 2, 1, 1, 1] with no full column.
fn valid_ticket() -> Ticket {
    let layout: [[(usize, u32); ITEMS_PER_ROW]; ROWS] = [
        [(0, 1), (1, 10), (3, 30), (5, 50), (7, 70)],
        [(0, 2), (2, 20), (4, 40), (5, 51), (8, 80)],
        [(1, 11), (2, 21), (3, 31), (4, 41), (6, 60)],
    ];
    let mut grid = Grid::default();
    for (row, cells) in layout.iter().enumerate() {
        for &(col, id) in cells {
            grid[row][col] = Some(Track::new(id, format!("Track {}", id)));
        }
    }
    Ticket::from_grid(ticket_id(1), grid)
}

fn set(ticket: &Ticket, row: usize, col: usize, id: u32) -> Ticket {
    ticket.with_replacements(&[(row, col, Track::new(id, format!("Track {}", id)))])
}

fn clear(ticket: &Ticket, row: usize, col: usize) -> Ticket {
    let mut ticket = ticket.clone();
    ticket.cells[row][col].track = None;
    ticket
}

#[test]
fn test_valid_ticket_passes() {
    let ticket = valid_ticket();
    let result = validate_ticket(&ticket);
    assert_eq!(result.ticket_id, "TICKET-0001");
    assert_eq!(result.errors, TicketValidationErrors::default());
    assert!(result.is_valid);
}

#[test]
fn test_validation_is_repeatable() {
    let ticket = clear(&valid_ticket(), 0, 0);
    assert_eq!(validate_ticket(&ticket), validate_ticket(&ticket));
}

#[test]
fn test_row_count_errors() {
    let ticket = clear(&valid_ticket(), 0, 0);
    let ticket = set(&ticket, 1, 6, 61);
    let result = validate_ticket(&ticket);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors.invalid_row_counts,
        vec![RowCount { row: 0, count: 4 }, RowCount { row: 1, count: 6 }]
    );
}

#[test]
fn test_duplicate_tracks() {
    // move track 10 into row 2 of column 1 where 11 sits
    let ticket = set(&valid_ticket(), 2, 1, 10);
    let result = validate_ticket(&ticket);
    assert!(!result.is_valid);
    assert_eq!(result.errors.duplicate_tracks, vec![10]);
    assert!(result.errors.invalid_row_counts.is_empty());
}

#[test]
fn test_one_full_column_allowed() {
    let ticket = set(&valid_ticket(), 2, 0, 3);
    let ticket = clear(&ticket, 2, 3);
    let result = validate_ticket(&ticket);
    assert_eq!(result.errors.full_columns_count, 1);
    assert!(!result.errors.full_columns_exceeded);
    assert!(result.is_valid);
}

#[test]
fn test_two_full_columns_rejected() {
    let ticket = set(&valid_ticket(), 2, 0, 3);
    let ticket = set(&ticket, 0, 2, 22);
    let result = validate_ticket(&ticket);
    assert_eq!(result.errors.full_columns_count, 2);
    assert!(result.errors.full_columns_exceeded);
    assert!(!result.is_valid);
}

#[test]
fn test_column_mismatch() {
    let ticket = set(&valid_ticket(), 0, 0, 15);
    let ticket = set(&ticket, 0, 1, 95);
    let result = validate_ticket(&ticket);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors.column_mismatches,
        vec![
            ColumnMismatch {
                row: 0,
                col: 0,
                track_id: 15,
                expected_col: Some(1),
            },
            ColumnMismatch {
                row: 0,
                col: 1,
                track_id: 95,
                expected_col: None,
            },
        ]
    );
}

#[test]
fn test_stored_coordinates_are_checked() {
    let mut ticket = valid_ticket();
    ticket.cells[1][4].row = 2;
    ticket.cells[2][7].col = 0;
    let result = validate_ticket(&ticket);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors.coordinate_mismatches,
        vec![
            CoordinateMismatch {
                row: 1,
                col: 4,
                stored_row: 2,
                stored_col: 4,
            },
            CoordinateMismatch {
                row: 2,
                col: 7,
                stored_row: 2,
                stored_col: 0,
            },
        ]
    );
    assert!(result
        .errors
        .messages()
        .contains(&"cell at row 2, column 5 is labelled row 3, column 5".to_string()));
}

#[test]
fn test_error_messages() {
    let ticket = clear(&valid_ticket(), 0, 0);
    let ticket = set(&ticket, 1, 0, 10);
    let messages = validate_ticket(&ticket).errors.messages();
    assert!(messages.contains(&"row 1 has 4 filled cells (expected 5)".to_string()));
    assert!(messages.contains(&"duplicate tracks: 10".to_string()));
    assert!(messages
        .iter()
        .any(|m| m == "track 10 at row 2, column 1 belongs to column 2"));
}

#[test]
fn test_summary_counts() {
    let good = valid_ticket();
    let mut bad = clear(&good, 0, 0);
    bad.id = ticket_id(2);
    let summary = validate_tickets(&[good.clone(), bad, good]);
    assert_eq!(summary.total_tickets, 3);
    assert_eq!(summary.valid_tickets, 2);
    assert_eq!(summary.invalid_tickets, 1);
    assert_eq!(summary.invalid_details.len(), 1);
    assert_eq!(summary.invalid_details[0].ticket_id, "TICKET-0002");
    assert!(!summary.is_ok());
}

#[test]
fn test_empty_batch() {
    let summary = validate_tickets(&[]);
    assert_eq!(summary, ValidationSummary::default());
    assert!(summary.is_ok());
}

#[test]
fn test_empty_ticket_reports_every_row() {
    let result = validate_ticket(&Ticket::empty("TICKET-0003"));
    assert_eq!(result.errors.invalid_row_counts.len(), ROWS);
    assert_eq!(result.errors.full_columns_count, 0);
}
