//! Ticket batch file format.
//!
//! `generate --output` writes a batch as pretty JSON; `validate` reads it
//! back. The batch carries its own track list so missed tracks can be
//! recomputed without the track list file.

use serde::{Deserialize, Serialize};
use tunelotto_engine::{batch_hash, Ticket, Track, ENGINE_ID, VERSION};

/// Current batch file format version.
pub const BATCH_FORMAT_VERSION: u32 = 1;

/// A generated batch with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketBatch {
    /// Batch file format version.
    pub format_version: u32,
    /// Engine version that produced the batch.
    pub engine_version: String,
    /// Seed the batch was generated from.
    pub seed: u32,
    /// BLAKE3 hash of `tickets`.
    pub batch_hash: String,
    /// The track pool used for generation.
    pub tracks: Vec<Track>,
    /// Tickets in batch order.
    pub tickets: Vec<Ticket>,
}

impl TicketBatch {
    /// Creates a batch and computes its hash.
    pub fn new(
        seed: u32,
        tracks: Vec<Track>,
        tickets: Vec<Ticket>,
    ) -> Result<Self, serde_json::Error> {
        let batch_hash = batch_hash(&tickets)?;
        Ok(Self {
            format_version: BATCH_FORMAT_VERSION,
            engine_version: format!("{} v{}", ENGINE_ID, VERSION),
            seed,
            batch_hash,
            tracks,
            tickets,
        })
    }

    /// Returns true if the stored hash matches the tickets.
    pub fn hash_matches(&self) -> Result<bool, serde_json::Error> {
        Ok(batch_hash(&self.tickets)? == self.batch_hash)
    }

    /// Returns true if this build can read the batch.
    pub fn is_supported(&self) -> bool {
        self.format_version <= BATCH_FORMAT_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunelotto_engine::{generate_tickets_seeded, numbered_pool, GeneratorConfig};

    fn sample_batch() -> TicketBatch {
        let tracks = numbered_pool(90);
        let tickets = generate_tickets_seeded(&tracks, 3, 5, &GeneratorConfig::default());
        TicketBatch::new(5, tracks, tickets).unwrap()
    }

    #[test]
    fn test_new_batch_hash_matches() {
        let batch = sample_batch();
        assert_eq!(batch.format_version, BATCH_FORMAT_VERSION);
        assert_eq!(batch.batch_hash.len(), 64);
        assert!(batch.hash_matches().unwrap());
        assert!(batch.is_supported());
    }

    #[test]
    fn test_tampered_batch_fails_hash() {
        let mut batch = sample_batch();
        batch.tickets.swap(0, 1);
        assert!(!batch.hash_matches().unwrap());
    }

    #[test]
    fn test_batch_json_roundtrip() {
        let batch = sample_batch();
        let json = serde_json::to_string_pretty(&batch).unwrap();
        let back: TicketBatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, batch);
        assert!(back.hash_matches().unwrap());
    }

    #[test]
    fn test_future_format_is_unsupported() {
        let mut batch = sample_batch();
        batch.format_version = BATCH_FORMAT_VERSION + 1;
        assert!(!batch.is_supported());
    }
}
