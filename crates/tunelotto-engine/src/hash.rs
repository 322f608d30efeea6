//! Batch fingerprinting.

use crate::ticket::Ticket;

/// Computes the BLAKE3 hash of a ticket batch.
///
/// The hash covers the JSON encoding of the tickets in order, so two batches
/// hash equal exactly when they contain the same tickets with the same
/// tracks in the same cells.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn batch_hash(tickets: &[Ticket]) -> Result<String, serde_json::Error> {
    let encoded = serde_json::to_vec(tickets)?;
    Ok(blake3::hash(&encoded).to_hex().to_string())
}
