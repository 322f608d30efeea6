//! Validate command implementation
//!
//! Re-checks a batch file with the independent validator and verifies its
//! stored hash.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use tunelotto_engine::{missed_tracks, validate_tickets, Track};

use super::json_output::{
    error_codes, print_json, CommandError, JsonError, ValidateOutput, ValidateResult,
};
use crate::batch::{TicketBatch, BATCH_FORMAT_VERSION};
use crate::input::load_batch;
use crate::render::format_missed;

/// Run the validate command
///
/// # Arguments
/// * `batch_path` - Path to a batch file written by `generate --output`
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(batch_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(batch_path)
    } else {
        run_human(batch_path)
    }
}

/// Loads a batch and validates it.
pub fn check_batch(batch_path: &str) -> Result<ValidateResult, CommandError> {
    let batch = load_batch(batch_path)?;
    validate_batch(&batch)
}

/// Validates a loaded batch.
pub fn validate_batch(batch: &TicketBatch) -> Result<ValidateResult, CommandError> {
    if !batch.is_supported() {
        return Err(CommandError::new(
            error_codes::UNSUPPORTED_FORMAT,
            format!(
                "batch format version {} is newer than supported version {}",
                batch.format_version, BATCH_FORMAT_VERSION
            ),
        ));
    }

    let summary = validate_tickets(&batch.tickets);
    let missed: Vec<Track> = missed_tracks(&batch.tracks, &batch.tickets)
        .into_iter()
        .cloned()
        .collect();

    Ok(ValidateResult {
        seed: batch.seed,
        batch_hash: batch.batch_hash.clone(),
        hash_matches: batch.hash_matches()?,
        summary,
        missed_tracks: missed,
    })
}

/// Run validate with human-readable (colored) output
fn run_human(batch_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), batch_path);

    let result = check_batch(batch_path)?;
    let summary = &result.summary;

    println!("{} {}", "Seed:".dimmed(), result.seed);
    if result.hash_matches {
        println!("  {} batch hash matches", "+".green());
    } else {
        println!("  {} batch hash does not match the tickets", "x".red());
    }

    for detail in &summary.invalid_details {
        for message in detail.errors.messages() {
            println!("  {} {}: {}", "x".red(), detail.ticket_id, message);
        }
    }

    let missed: Vec<&Track> = result.missed_tracks.iter().collect();
    println!("{} {}", "Missed tracks:".dimmed(), format_missed(&missed));

    if summary.is_ok() && result.hash_matches {
        println!(
            "\n{} {} ticket(s) valid",
            "SUCCESS".green().bold(),
            summary.valid_tickets
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} {} of {} ticket(s) invalid",
            "FAILED".red().bold(),
            summary.invalid_tickets,
            summary.total_tickets
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(batch_path: &str) -> Result<ExitCode> {
    let output = match check_batch(batch_path) {
        Ok(result) => ValidateOutput::checked(result),
        Err(err) => ValidateOutput::failure(vec![JsonError::from(err)]),
    };

    print_json(&output)?;
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
