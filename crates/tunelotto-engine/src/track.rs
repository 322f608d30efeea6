//! Track pool model.
//!
//! A pool holds up to [`MAX_TRACKS`] numbered tracks. Track ids are dense and
//! assigned in input order, and every id belongs to exactly one grid column
//! through the fixed [`COLUMN_RANGES`] table.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::ticket::COLS;

/// Track identifier (1-based).
pub type TrackId = u32;

/// Maximum number of tracks in a pool.
pub const MAX_TRACKS: usize = 90;

/// Inclusive track id range for each grid column.
pub const COLUMN_RANGES: [(TrackId, TrackId); COLS] = [
    (1, 9),
    (10, 19),
    (20, 29),
    (30, 39),
    (40, 49),
    (50, 59),
    (60, 69),
    (70, 79),
    (80, 90),
];

/// A single playable item of the pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// Dense 1-based id, derived from input order.
    pub id: TrackId,
    /// Display name as entered.
    pub name: String,
}

impl Track {
    /// Creates a new track.
    pub fn new(id: TrackId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the grid column this track belongs to.
    pub fn column(&self) -> Option<usize> {
        column_of(self.id)
    }
}

/// Parses a raw track list.
///
/// Splits on line breaks, trims each line, drops empty lines, keeps at most
/// [`MAX_TRACKS`] entries and numbers them `1..=N` in order of appearance.
///
/// # Example
/// ```
/// use tunelotto_engine::parse_tracks;
///
/// let tracks = parse_tracks("  Intro \n\nOutro\r\n");
/// assert_eq!(tracks.len(), 2);
/// assert_eq!(tracks[1].id, 2);
/// assert_eq!(tracks[1].name, "Outro");
/// ```
pub fn parse_tracks(raw: &str) -> Vec<Track> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_TRACKS)
        .zip(1..)
        .map(|(name, id)| Track::new(id, name))
        .collect()
}

/// Returns the column index whose range contains `id`.
pub fn column_of(id: TrackId) -> Option<usize> {
    COLUMN_RANGES
        .iter()
        .position(|&(min, max)| (min..=max).contains(&id))
}

/// Returns the id range of a column.
///
/// # Panics
/// Panics if `col >= COLS`.
pub fn column_range(col: usize) -> RangeInclusive<TrackId> {
    let (min, max) = COLUMN_RANGES[col];
    min..=max
}

/// Returns the tracks of the pool eligible for a column, in pool order.
pub fn tracks_for_column(tracks: &[Track], col: usize) -> Vec<&Track> {
    let range = column_range(col);
    tracks.iter().filter(|t| range.contains(&t.id)).collect()
}

/// Readiness of a track pool for ticket generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PoolStatus {
    /// No tracks at all.
    Empty,
    /// Fewer than [`MAX_TRACKS`] tracks.
    Insufficient { missing: usize },
    /// A full pool.
    Ready,
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolStatus::Empty => write!(f, "enter at least one track"),
            PoolStatus::Insufficient { missing } => write!(
                f,
                "not enough tracks: {}/{}, add {} more",
                MAX_TRACKS - missing,
                MAX_TRACKS,
                missing
            ),
            PoolStatus::Ready => write!(f, "ready to generate tickets"),
        }
    }
}

/// Result of checking a pool before generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolCheck {
    /// Number of tracks in the pool.
    pub track_count: usize,
    /// Pool readiness.
    #[serde(flatten)]
    pub status: PoolStatus,
}

impl PoolCheck {
    /// Returns true if the pool is full.
    pub fn is_ready(&self) -> bool {
        self.status == PoolStatus::Ready
    }
}

/// Checks whether a pool is complete.
///
/// This is a precondition for callers; the generator itself accepts any pool.
pub fn check_pool(tracks: &[Track]) -> PoolCheck {
    let track_count = tracks.len();
    let status = match track_count {
        0 => PoolStatus::Empty,
        n if n < MAX_TRACKS => PoolStatus::Insufficient {
            missing: MAX_TRACKS - n,
        },
        _ => PoolStatus::Ready,
    };
    PoolCheck {
        track_count,
        status,
    }
}

/// Builds a pool of `count` tracks named `Track 1`, `Track 2`, ...
pub fn numbered_pool(count: usize) -> Vec<Track> {
    (1..=count.min(MAX_TRACKS) as TrackId)
        .map(|id| Track::new(id, format!("Track {}", id)))
        .collect()
}
