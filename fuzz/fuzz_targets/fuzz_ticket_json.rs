//! Fuzz target for ticket JSON parsing and validation.
//!
//! Any ticket that deserializes must validate without panicking, and the
//! result must be the same on a second run.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tunelotto_engine::{validate_ticket, Ticket};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(ticket) = serde_json::from_str::<Ticket>(s) {
            let first = validate_ticket(&ticket);
            let second = validate_ticket(&ticket);
            assert_eq!(first, second);
        }
    }
});
