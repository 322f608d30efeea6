//! Plain-text ticket rendering.

use std::fmt::Write;

use tunelotto_engine::{Ticket, Track, COLS};

const CELL_WIDTH: usize = 4;

/// Renders a ticket as a boxed 3x9 grid of track ids.
///
/// ```text
/// TICKET-0001
/// +----+----+----+----+----+----+----+----+----+
/// |  3 |    | 21 |    | 44 | 52 |    |    | 85 |
/// ...
/// ```
pub fn render_ticket(ticket: &Ticket) -> String {
    let border = format!("+{}\n", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(COLS));
    let mut out = String::new();
    let _ = writeln!(out, "{}", ticket.id);
    out.push_str(&border);
    for row in &ticket.cells {
        out.push('|');
        for cell in row {
            match &cell.track {
                Some(track) => {
                    let _ = write!(out, "{:>width$} |", track.id, width = CELL_WIDTH - 1);
                }
                None => {
                    let _ = write!(out, "{}|", " ".repeat(CELL_WIDTH));
                }
            }
        }
        out.push('\n');
        out.push_str(&border);
    }
    out
}

/// Lists track names of a ticket in row-major order.
pub fn render_track_names(ticket: &Ticket) -> String {
    ticket
        .filled_cells()
        .filter_map(|cell| cell.track.as_ref())
        .map(|track| format!("{:>3}  {}", track.id, track.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats missed tracks as `id name` pairs, or `none`.
pub fn format_missed(missed: &[&Track]) -> String {
    if missed.is_empty() {
        return "none".to_string();
    }
    missed
        .iter()
        .map(|t| format!("{} {}", t.id, t.name))
        .collect::<Vec<_>>()
        .join(", ")
}
