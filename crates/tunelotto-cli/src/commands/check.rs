//! Check command implementation
//!
//! Reports whether a track list is ready for generation.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use tunelotto_engine::{check_pool, PoolCheck};

use super::json_output::{print_json, CheckOutput, CommandError, JsonError};
use crate::input::load_tracks;

/// Run the check command
///
/// # Returns
/// Exit code: 0 if the pool holds 90 tracks, 1 otherwise
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

/// Loads a track list and checks its size.
pub fn check_input(input: &str) -> Result<PoolCheck, CommandError> {
    let tracks = load_tracks(input)?;
    Ok(check_pool(&tracks))
}

fn run_human(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Checking:".cyan().bold(), input);

    let pool = check_input(input)?;
    println!("{} {}", "Tracks:".dimmed(), pool.track_count);

    if pool.is_ready() {
        println!("\n{} {}", "READY".green().bold(), pool.status);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("\n{} {}", "NOT READY".yellow().bold(), pool.status);
        Ok(ExitCode::from(1))
    }
}

fn run_json(input: &str) -> Result<ExitCode> {
    let output = match check_input(input) {
        Ok(pool) => CheckOutput::checked(pool),
        Err(err) => CheckOutput::failure(vec![JsonError::from(err)]),
    };

    print_json(&output)?;
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
