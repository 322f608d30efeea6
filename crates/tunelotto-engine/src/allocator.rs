//! Batch generation with pool coverage.
//!
//! Pass 1 generates tickets one after another, raising the priority weight of
//! still-unused tracks as the remaining tickets run short of cells. Pass 2
//! ([`repair_coverage`]) swaps leftover tracks into existing tickets, one
//! same-column cell at a time, producing new ticket values.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::generator::{Priority, TicketGenerator};
use crate::rng::{create_rng, derive_seed};
use crate::ticket::{Ticket, ITEMS_PER_TICKET};
use crate::track::{Track, TrackId};

/// Generates `count` tickets with the default configuration.
pub fn generate_tickets<R: Rng + ?Sized>(
    tracks: &[Track],
    count: usize,
    rng: &mut R,
) -> Vec<Ticket> {
    generate_tickets_with_config(tracks, count, &GeneratorConfig::default(), rng)
}

/// Generates a reproducible batch from a seed.
///
/// Generation and repair draw from separate streams derived from `seed`.
pub fn generate_tickets_seeded(
    tracks: &[Track],
    count: usize,
    seed: u32,
    config: &GeneratorConfig,
) -> Vec<Ticket> {
    let mut rng = create_rng(derive_seed(seed, "tickets"));
    let tickets = generate_pass(tracks, count, config, &mut rng);
    let mut repair_rng = create_rng(derive_seed(seed, "repair"));
    repair_coverage(tracks, tickets, config, &mut repair_rng)
}

/// Generates `count` tickets, then repairs coverage.
///
/// Ticket ids run from `TICKET-0001` to the batch size.
pub fn generate_tickets_with_config<R: Rng + ?Sized>(
    tracks: &[Track],
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Ticket> {
    let tickets = generate_pass(tracks, count, config, rng);
    repair_coverage(tracks, tickets, config, rng)
}

fn generate_pass<R: Rng + ?Sized>(
    tracks: &[Track],
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Ticket> {
    let generator = TicketGenerator::new(tracks, config);
    let mut used: HashSet<TrackId> = HashSet::new();
    let mut tickets = Vec::with_capacity(count);

    for i in 0..count {
        let unused: HashSet<TrackId> = tracks
            .iter()
            .map(|t| t.id)
            .filter(|id| !used.contains(id))
            .collect();
        let coverable = (count - i) * ITEMS_PER_TICKET;
        let weight = config.priority.weight_for(unused.len(), coverable);

        let sequence = u32::try_from(i + 1).unwrap_or(u32::MAX);
        let ticket = generator.generate(sequence, Some(Priority::new(&unused, weight)), rng);
        used.extend(ticket.track_ids());
        tickets.push(ticket);
    }

    tickets
}

/// Swaps never-used tracks into existing tickets.
///
/// A swap replaces a filled cell with an unused track of the same column, so
/// row counts, full columns and column ranges are unchanged. The removed
/// track must still appear on another ticket, so coverage only grows. Tickets
/// are visited newest first: the `ceil(remaining / per_ticket)` most recent
/// ones, then the older ones when `sweep_all_tickets` is set. Tracks with no
/// eligible slot stay uncovered.
pub fn repair_coverage<R: Rng + ?Sized>(
    tracks: &[Track],
    mut tickets: Vec<Ticket>,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Ticket> {
    let mut usage: HashMap<TrackId, usize> = HashMap::new();
    for id in tickets.iter().flat_map(Ticket::track_ids) {
        *usage.entry(id).or_insert(0) += 1;
    }

    let mut unused: Vec<&Track> = tracks
        .iter()
        .filter(|t| !usage.contains_key(&t.id))
        .collect();
    if unused.is_empty() || tickets.is_empty() {
        return tickets;
    }

    let per_ticket = config.repair.replacements_per_ticket.max(1);
    let window = unused.len().div_ceil(per_ticket).min(tickets.len());
    let visit = if config.repair.sweep_all_tickets {
        tickets.len()
    } else {
        window
    };
    let before = unused.len();

    for index in (0..tickets.len()).rev().take(visit) {
        if unused.is_empty() {
            break;
        }

        let mut positions: Vec<(usize, usize, TrackId)> = tickets[index]
            .filled_cells()
            .filter_map(|cell| cell.track.as_ref().map(|t| (cell.row, cell.col, t.id)))
            .collect();
        positions.shuffle(rng);

        let mut replacements: Vec<(usize, usize, Track)> = Vec::new();
        for (row, col, old_id) in positions {
            if replacements.len() >= per_ticket || unused.is_empty() {
                break;
            }
            if usage.get(&old_id).copied().unwrap_or(0) < 2 {
                continue;
            }
            let Some(pick) = unused.iter().position(|t| t.column() == Some(col)) else {
                continue;
            };
            let new_track = unused.remove(pick);

            if let Some(n) = usage.get_mut(&old_id) {
                *n -= 1;
            }
            usage.insert(new_track.id, 1);
            debug!(
                ticket = %tickets[index].id,
                row,
                col,
                removed = old_id,
                added = new_track.id,
                "coverage swap"
            );
            replacements.push((row, col, new_track.clone()));
        }

        if !replacements.is_empty() {
            tickets[index] = tickets[index].with_replacements(&replacements);
        }
    }

    info!(
        uncovered_before = before,
        uncovered_after = unused.len(),
        "coverage repair finished"
    );
    tickets
}

/// Returns the tracks that appear on none of the tickets, in pool order.
pub fn missed_tracks<'a>(tracks: &'a [Track], tickets: &[Ticket]) -> Vec<&'a Track> {
    let used: HashSet<TrackId> = tickets.iter().flat_map(Ticket::track_ids).collect();
    tracks.iter().filter(|t| !used.contains(&t.id)).collect()
}
