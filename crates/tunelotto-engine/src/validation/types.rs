//! Validation result types.

use serde::{Deserialize, Serialize};

use crate::track::TrackId;

/// A row whose filled cell count is not five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCount {
    pub row: usize,
    pub count: usize,
}

/// A filled cell whose track id lies outside the cell's column range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMismatch {
    pub row: usize,
    pub col: usize,
    pub track_id: TrackId,
    /// Column the id belongs to, or `None` if it is outside the pool range.
    pub expected_col: Option<usize>,
}

/// A cell whose stored coordinates disagree with its grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateMismatch {
    pub row: usize,
    pub col: usize,
    pub stored_row: usize,
    pub stored_col: usize,
}

/// Everything wrong with one ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketValidationErrors {
    /// Rows that do not hold exactly five tracks.
    pub invalid_row_counts: Vec<RowCount>,
    /// Track ids placed more than once, ascending.
    pub duplicate_tracks: Vec<TrackId>,
    /// Columns with all three rows filled.
    pub full_columns_count: usize,
    /// More than one full column.
    pub full_columns_exceeded: bool,
    /// Cells whose track is in the wrong column.
    pub column_mismatches: Vec<ColumnMismatch>,
    /// Cells whose `row`/`col` fields do not match where they sit.
    pub coordinate_mismatches: Vec<CoordinateMismatch>,
}

impl TicketValidationErrors {
    /// Returns true if no invariant is violated.
    pub fn is_empty(&self) -> bool {
        self.invalid_row_counts.is_empty()
            && self.duplicate_tracks.is_empty()
            && !self.full_columns_exceeded
            && self.column_mismatches.is_empty()
            && self.coordinate_mismatches.is_empty()
    }

    /// Human-readable description of each violation.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        for rc in &self.invalid_row_counts {
            messages.push(format!(
                "row {} has {} filled cells (expected 5)",
                rc.row + 1,
                rc.count
            ));
        }
        if !self.duplicate_tracks.is_empty() {
            let ids: Vec<String> = self.duplicate_tracks.iter().map(|id| id.to_string()).collect();
            messages.push(format!("duplicate tracks: {}", ids.join(", ")));
        }
        if self.full_columns_exceeded {
            messages.push(format!(
                "{} full columns (at most 1 allowed)",
                self.full_columns_count
            ));
        }
        for m in &self.column_mismatches {
            let expected = match m.expected_col {
                Some(col) => format!("column {}", col + 1),
                None => "no column".to_string(),
            };
            messages.push(format!(
                "track {} at row {}, column {} belongs to {}",
                m.track_id,
                m.row + 1,
                m.col + 1,
                expected
            ));
        }
        for m in &self.coordinate_mismatches {
            messages.push(format!(
                "cell at row {}, column {} is labelled row {}, column {}",
                m.row + 1,
                m.col + 1,
                m.stored_row + 1,
                m.stored_col + 1
            ));
        }
        messages
    }
}

/// Validation outcome for one ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketValidationResult {
    pub is_valid: bool,
    pub ticket_id: String,
    pub errors: TicketValidationErrors,
}

/// Validation outcome for a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total_tickets: usize,
    pub valid_tickets: usize,
    pub invalid_tickets: usize,
    /// Results of the tickets that failed, in batch order.
    pub invalid_details: Vec<TicketValidationResult>,
}

impl ValidationSummary {
    /// Returns true if every ticket passed.
    pub fn is_ok(&self) -> bool {
        self.invalid_tickets == 0
    }
}
