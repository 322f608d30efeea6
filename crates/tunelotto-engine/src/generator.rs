//! Single ticket generation.
//!
//! Each attempt picks a column template, draws tracks per column (softly
//! favoring a priority set), seats them with [`place_strict`] and re-checks
//! the result. After `max_attempts` failed attempts the ticket is built from
//! [`FALLBACK_COLUMN_COUNTS`] with [`place_fallback`].

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::distribution::{random_column_counts, ColumnCounts, FALLBACK_COLUMN_COUNTS};
use crate::placement::{place_fallback, place_strict};
use crate::ticket::{ticket_id, ColumnTracks, Ticket, COLS, ITEMS_PER_ROW, ROWS};
use crate::track::{tracks_for_column, Track, TrackId};

/// Tracks to favor during selection, with the strength of the bias.
#[derive(Debug, Clone, Copy)]
pub struct Priority<'a> {
    /// Track ids to favor.
    pub ids: &'a HashSet<TrackId>,
    /// Probability, per column, of ordering priority tracks first.
    pub weight: f64,
}

impl<'a> Priority<'a> {
    /// Creates a priority over `ids` with the given weight.
    pub fn new(ids: &'a HashSet<TrackId>, weight: f64) -> Self {
        Self { ids, weight }
    }
}

/// Generates tickets from a fixed pool.
#[derive(Debug)]
pub struct TicketGenerator<'a> {
    columns: [Vec<&'a Track>; COLS],
    config: &'a GeneratorConfig,
}

impl<'a> TicketGenerator<'a> {
    /// Buckets the pool by column.
    pub fn new(tracks: &'a [Track], config: &'a GeneratorConfig) -> Self {
        Self {
            columns: std::array::from_fn(|col| tracks_for_column(tracks, col)),
            config,
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &GeneratorConfig {
        self.config
    }

    /// Builds a priority with the configured default weight.
    pub fn default_priority<'p>(&self, ids: &'p HashSet<TrackId>) -> Priority<'p> {
        Priority::new(ids, self.config.default_priority_weight)
    }

    /// Generates ticket number `sequence`.
    ///
    /// Always returns a ticket. With a full pool the ticket satisfies every
    /// ticket invariant; with a partial pool it may have fewer filled cells.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        sequence: u32,
        priority: Option<Priority<'_>>,
        rng: &mut R,
    ) -> Ticket {
        for attempt in 0..self.config.max_attempts {
            let counts = random_column_counts(rng);
            let selected = self.select(&counts, priority, false, rng);

            let Some(grid) = place_strict(&selected, rng) else {
                debug!(sequence, attempt, "placement attempt failed");
                continue;
            };

            let ticket = Ticket::from_grid(ticket_id(sequence), grid);
            if passes_quick_check(&ticket) {
                return ticket;
            }
            debug!(sequence, attempt, "placed ticket failed quick check");
        }

        warn!(
            sequence,
            attempts = self.config.max_attempts,
            "falling back to fixed column template"
        );
        self.fallback(sequence, priority, rng)
    }

    /// Builds a ticket from the fixed template.
    ///
    /// Priority tracks, if any, are always ordered first here.
    fn fallback<R: Rng + ?Sized>(
        &self,
        sequence: u32,
        priority: Option<Priority<'_>>,
        rng: &mut R,
    ) -> Ticket {
        let selected = self.select(&FALLBACK_COLUMN_COUNTS, priority, true, rng);
        Ticket::from_grid(ticket_id(sequence), place_fallback(&selected))
    }

    /// Orders each column's tracks and keeps the first `counts[col]`.
    fn select<R: Rng + ?Sized>(
        &self,
        counts: &ColumnCounts,
        priority: Option<Priority<'_>>,
        force_priority: bool,
        rng: &mut R,
    ) -> ColumnTracks {
        std::array::from_fn(|col| {
            let mut ordered = self.order_column(col, priority, force_priority, rng);
            ordered.truncate(counts[col]);
            ordered.into_iter().cloned().collect()
        })
    }

    fn order_column<R: Rng + ?Sized>(
        &self,
        col: usize,
        priority: Option<Priority<'_>>,
        force_priority: bool,
        rng: &mut R,
    ) -> Vec<&'a Track> {
        let mut eligible = self.columns[col].clone();

        match priority.filter(|p| !p.ids.is_empty()) {
            Some(p) if force_priority || rng.gen::<f64>() < p.weight => {
                let (mut favored, mut rest): (Vec<&Track>, Vec<&Track>) =
                    eligible.into_iter().partition(|t| p.ids.contains(&t.id));
                favored.shuffle(rng);
                rest.shuffle(rng);
                favored.extend(rest);
                favored
            }
            _ => {
                eligible.shuffle(rng);
                eligible
            }
        }
    }
}

/// Generates one ticket with the default configuration.
///
/// `priority` softly favors its tracks; pass `None` for a uniform draw.
pub fn generate_ticket<R: Rng + ?Sized>(
    tracks: &[Track],
    sequence: u32,
    priority: Option<Priority<'_>>,
    rng: &mut R,
) -> Ticket {
    let config = GeneratorConfig::default();
    TicketGenerator::new(tracks, &config).generate(sequence, priority, rng)
}

/// Fast sanity check run on every placed ticket.
fn passes_quick_check(ticket: &Ticket) -> bool {
    (0..ROWS).all(|row| ticket.row_fill(row) == ITEMS_PER_ROW)
        && !ticket.has_duplicates()
        && ticket.full_columns() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use crate::ticket::ITEMS_PER_TICKET;
    use crate::track::{numbered_pool, MAX_TRACKS};

    #[test]
    fn test_generate_full_pool() {
        let pool = numbered_pool(MAX_TRACKS);
        let mut rng = create_rng(5);
        let ticket = generate_ticket(&pool, 3, None, &mut rng);
        assert_eq!(ticket.id, "TICKET-0003");
        assert!(passes_quick_check(&ticket));
        assert_eq!(ticket.filled_count(), ITEMS_PER_TICKET);
    }

    #[test]
    fn test_same_seed_same_ticket() {
        let pool = numbered_pool(MAX_TRACKS);
        let a = generate_ticket(&pool, 1, None, &mut create_rng(99));
        let b = generate_ticket(&pool, 1, None, &mut create_rng(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_priority_picks_priority_tracks() {
        let pool = numbered_pool(MAX_TRACKS);
        // the first five tracks of every column
        let ids: HashSet<TrackId> = (0..COLS)
            .flat_map(|col| tracks_for_column(&pool, col).into_iter().take(5))
            .map(|t| t.id)
            .collect();
        let mut rng = create_rng(8);
        for seq in 1..=20 {
            let ticket = generate_ticket(&pool, seq, Some(Priority::new(&ids, 1.0)), &mut rng);
            // at most three per column, all of them from the favored five
            assert!(ticket.track_ids().all(|id| ids.contains(&id)));
        }
    }

    /// Share of filled cells holding a priority track over `tickets` tickets.
    fn priority_share(ids: &HashSet<TrackId>, weight: f64, tickets: u32, seed: u32) -> f64 {
        let pool = numbered_pool(MAX_TRACKS);
        let mut rng = create_rng(seed);
        let mut hits = 0usize;
        let mut cells = 0usize;
        for seq in 1..=tickets {
            let ticket = generate_ticket(&pool, seq, Some(Priority::new(ids, weight)), &mut rng);
            hits += ticket.track_ids().filter(|id| ids.contains(id)).count();
            cells += ticket.filled_count();
        }
        hits as f64 / cells as f64
    }

    #[test]
    fn test_priority_weight_raises_inclusion_rate() {
        // every third track, at least three per column
        let ids: HashSet<TrackId> = (1..=MAX_TRACKS as TrackId)
            .filter(|id| id % 3 == 0)
            .collect();
        let low = priority_share(&ids, 0.1, 300, 21);
        let mid = priority_share(&ids, 0.5, 300, 22);
        let high = priority_share(&ids, 0.9, 300, 23);
        assert!(low < mid, "0.1 -> {}, 0.5 -> {}", low, mid);
        assert!(mid < high, "0.5 -> {}, 0.9 -> {}", mid, high);
        assert!(high < 1.0, "0.9 -> {}", high);
        assert!(low > 0.2);
    }

    #[test]
    fn test_empty_pool_falls_back() {
        let config = GeneratorConfig {
            max_attempts: 3,
            ..Default::default()
        };
        let generator = TicketGenerator::new(&[], &config);
        let ticket = generator.generate(1, None, &mut create_rng(1));
        assert_eq!(ticket.id, "TICKET-0001");
        assert_eq!(ticket.filled_count(), 0);
    }

    #[test]
    fn test_partial_pool_keeps_columns() {
        let pool = numbered_pool(40);
        let ticket = generate_ticket(&pool, 1, None, &mut create_rng(4));
        assert!(!ticket.has_duplicates());
        for cell in ticket.filled_cells() {
            let track = cell.track.as_ref().unwrap();
            assert_eq!(track.column(), Some(cell.col));
            assert!(track.id <= 40);
        }
    }

    #[test]
    fn test_fallback_ticket_is_valid_for_full_pool() {
        let pool = numbered_pool(MAX_TRACKS);
        let config = GeneratorConfig::default();
        let generator = TicketGenerator::new(&pool, &config);
        let ticket = generator.fallback(9, None, &mut create_rng(2));
        assert!(passes_quick_check(&ticket));
        assert_eq!(ticket.id, "TICKET-0009");
    }

    #[test]
    fn test_default_priority_uses_config_weight() {
        let pool = numbered_pool(MAX_TRACKS);
        let config = GeneratorConfig::default();
        let generator = TicketGenerator::new(&pool, &config);
        let ids = HashSet::new();
        assert_eq!(generator.default_priority(&ids).weight, 0.3);
    }
}
