//! TuneLotto Engine - Music Bingo Ticket Generation
//!
//! This crate turns a list of up to 90 track titles into bingo tickets. Every
//! ticket is a 3x9 grid with exactly 15 tracks (five per row), each track sits
//! in the column whose id range contains it, and at most one column is filled
//! top to bottom.
//!
//! # Features
//!
//! - **Ticket generation**: randomized column templates and load-balanced
//!   placement, with a deterministic fallback after repeated failures
//! - **Pool coverage**: batch generation favors unused tracks as the batch
//!   runs out, then swaps leftovers into existing tickets
//! - **Independent validation**: re-derives every ticket invariant from the
//!   cell grid and reports each violation
//!
//! # Determinism
//!
//! All randomized functions take an injected RNG. Given the same seed, track
//! list, count and config, [`generate_tickets_seeded`] returns identical
//! tickets, fingerprinted by [`batch_hash`].
//!
//! # Example
//!
//! ```
//! use tunelotto_engine::{
//!     generate_tickets_seeded, missed_tracks, parse_tracks, validate_tickets, GeneratorConfig,
//! };
//!
//! let raw: String = (1..=90).map(|i| format!("Track {}\n", i)).collect();
//! let tracks = parse_tracks(&raw);
//!
//! let tickets = generate_tickets_seeded(&tracks, 10, 42, &GeneratorConfig::default());
//! assert_eq!(tickets.len(), 10);
//!
//! let summary = validate_tickets(&tickets);
//! assert_eq!(summary.invalid_tickets, 0);
//! println!("missed: {}", missed_tracks(&tracks, &tickets).len());
//! ```
//!
//! # Module Structure
//!
//! - [`track`]: Track pool, parsing and column ranges
//! - [`ticket`]: Ticket grid types
//! - [`distribution`]: Column count templates
//! - [`placement`]: Strict and fallback grid placement
//! - [`generator`]: Single ticket generation
//! - [`allocator`]: Batch generation and coverage repair
//! - [`validation`]: Independent ticket validator
//! - [`config`]: Generator tunables
//! - [`rng`]: Seeded RNG helpers
//! - [`hash`]: Batch fingerprinting

pub mod allocator;
pub mod config;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod hash;
pub mod placement;
pub mod rng;
pub mod ticket;
pub mod track;
pub mod validation;

// Re-export main types
pub use allocator::{
    generate_tickets, generate_tickets_seeded, generate_tickets_with_config, missed_tracks,
    repair_coverage,
};
pub use config::{GeneratorConfig, PriorityConfig, PriorityTier, RepairConfig};
pub use distribution::{
    is_row_satisfiable, random_column_counts, ColumnCounts, COLUMN_TEMPLATES,
    FALLBACK_COLUMN_COUNTS,
};
pub use error::ConfigError;
pub use generator::{generate_ticket, Priority, TicketGenerator};
pub use hash::batch_hash;
pub use placement::{place_fallback, place_strict};
pub use rng::{create_rng, derive_seed};
pub use ticket::{
    ticket_id, ColumnTracks, Grid, Ticket, TicketCell, COLS, ITEMS_PER_ROW, ITEMS_PER_TICKET,
    ROWS,
};
pub use track::{
    check_pool, column_of, column_range, numbered_pool, parse_tracks, tracks_for_column,
    PoolCheck, PoolStatus, Track, TrackId, COLUMN_RANGES, MAX_TRACKS,
};
pub use validation::{
    validate_ticket, validate_tickets, ColumnMismatch, CoordinateMismatch, RowCount,
    TicketValidationErrors, TicketValidationResult, ValidationSummary,
};

/// Crate version for batch files.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine identifier recorded in batch files.
pub const ENGINE_ID: &str = "tunelotto-engine";
