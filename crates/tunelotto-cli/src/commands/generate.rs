//! Generate command implementation
//!
//! Loads a track list, generates a reproducible batch, validates it and
//! optionally writes the batch file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use tracing::info;
use tunelotto_engine::{
    check_pool, generate_tickets_seeded, missed_tracks, validate_tickets, Track,
    ValidationSummary,
};

use super::json_output::{
    error_codes, print_json, CommandError, GenerateOutput, GenerateResult, JsonError,
};
use crate::batch::TicketBatch;
use crate::input::{load_config, load_tracks};
use crate::render::{format_missed, render_ticket, render_track_names};

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Track list path (`-` for stdin)
    pub input: String,
    /// Number of tickets
    pub count: usize,
    /// Seed; a random one is drawn when absent
    pub seed: Option<u32>,
    /// Generator config path
    pub config: Option<String>,
    /// Batch output path
    pub output: Option<String>,
    /// Generate from a pool with fewer than 90 tracks
    pub allow_partial: bool,
}

/// A generated and validated batch.
#[derive(Debug)]
pub struct Generated {
    pub batch: TicketBatch,
    pub summary: ValidationSummary,
    pub missed: Vec<Track>,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 if every ticket is valid, 1 otherwise
pub fn run(options: &GenerateOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(options)
    } else {
        run_human(options)
    }
}

/// Loads input, generates the batch and writes it if requested.
pub fn generate(options: &GenerateOptions) -> Result<Generated, CommandError> {
    let tracks = load_tracks(&options.input)?;

    let pool = check_pool(&tracks);
    if !pool.is_ready() && !options.allow_partial {
        return Err(CommandError::new(
            error_codes::POOL_NOT_READY,
            format!("{} (use --allow-partial to generate anyway)", pool.status),
        ));
    }

    let config = load_config(options.config.as_deref())?;
    let seed = options.seed.unwrap_or_else(rand::random);

    let tickets = generate_tickets_seeded(&tracks, options.count, seed, &config);
    let summary = validate_tickets(&tickets);
    let missed: Vec<Track> = missed_tracks(&tracks, &tickets)
        .into_iter()
        .cloned()
        .collect();
    info!(
        seed,
        tickets = tickets.len(),
        invalid = summary.invalid_tickets,
        missed = missed.len(),
        "batch generated"
    );

    let batch = TicketBatch::new(seed, tracks, tickets)?;
    if let Some(path) = &options.output {
        write_batch(&batch, path)?;
    }

    Ok(Generated {
        batch,
        summary,
        missed,
    })
}

fn write_batch(batch: &TicketBatch, path: &str) -> Result<(), CommandError> {
    let json = serde_json::to_string_pretty(batch)?;
    std::fs::write(Path::new(path), json).map_err(|e| {
        CommandError::new(
            error_codes::FILE_WRITE,
            format!("failed to write batch '{}': {}", path, e),
        )
    })
}

/// Renders every ticket as a grid followed by its track names.
pub fn render_tickets(batch: &TicketBatch) -> String {
    batch
        .tickets
        .iter()
        .map(|ticket| format!("{}{}\n\n", render_ticket(ticket), render_track_names(ticket)))
        .collect()
}

/// Run generate with human-readable (colored) output
fn run_human(options: &GenerateOptions) -> Result<ExitCode> {
    println!("{} {}", "Tracks:".cyan().bold(), options.input);

    let Generated {
        batch,
        summary,
        missed,
    } = generate(options)?;

    println!("{} {}", "Seed:".dimmed(), batch.seed);
    println!("{} {}", "Hash:".dimmed(), &batch.batch_hash[..16]);
    println!();

    print!("{}", render_tickets(&batch));

    for result in &summary.invalid_details {
        for message in result.errors.messages() {
            println!("  {} {}: {}", "x".red(), result.ticket_id, message);
        }
    }

    let missed_refs: Vec<&Track> = missed.iter().collect();
    println!("{} {}", "Missed tracks:".dimmed(), format_missed(&missed_refs));
    if let Some(path) = &options.output {
        println!("{} {}", "Written:".dimmed(), path);
    }

    if summary.is_ok() {
        println!(
            "\n{} {} ticket(s) generated, all valid",
            "SUCCESS".green().bold(),
            summary.total_tickets
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

/// Run generate with machine-readable JSON output
fn run_json(options: &GenerateOptions) -> Result<ExitCode> {
    let output = match generate(options) {
        Ok(Generated {
            batch,
            summary,
            missed,
        }) => GenerateOutput::finished(GenerateResult {
            seed: batch.seed,
            batch_hash: batch.batch_hash,
            summary,
            missed_tracks: missed,
            output_path: options.output.clone(),
            tickets: options.output.is_none().then_some(batch.tickets),
        }),
        Err(err) => GenerateOutput::failure(vec![JsonError::from(err)]),
    };

    print_json(&output)?;
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_tracks(dir: &Path, count: usize) -> String {
        let path = dir.join("tracks.txt");
        let raw: String = (1..=count).map(|i| format!("Song {}\n", i)).collect();
        std::fs::write(&path, raw).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_generate_writes_batch() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("batch.json");
        let options = GenerateOptions {
            input: write_tracks(tmp.path(), 90),
            count: 10,
            seed: Some(42),
            output: Some(output.to_string_lossy().into_owned()),
            ..Default::default()
        };

        let generated = generate(&options).unwrap();
        assert_eq!(generated.batch.tickets.len(), 10);
        assert_eq!(generated.batch.seed, 42);
        assert!(generated.summary.is_ok());

        let written: TicketBatch =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, generated.batch);
    }

    #[test]
    fn test_generate_is_reproducible() {
        let tmp = tempfile::tempdir().unwrap();
        let options = GenerateOptions {
            input: write_tracks(tmp.path(), 90),
            count: 4,
            seed: Some(7),
            ..Default::default()
        };
        let a = generate(&options).unwrap();
        let b = generate(&options).unwrap();
        assert_eq!(a.batch.batch_hash, b.batch.batch_hash);
    }

    #[test]
    fn test_generate_refuses_partial_pool() {
        let tmp = tempfile::tempdir().unwrap();
        let options = GenerateOptions {
            input: write_tracks(tmp.path(), 30),
            count: 2,
            seed: Some(1),
            ..Default::default()
        };
        let err = generate(&options).unwrap_err();
        assert_eq!(err.code, error_codes::POOL_NOT_READY);
        assert!(err.message.contains("30/90"));
    }

    #[test]
    fn test_generate_allows_partial_pool() {
        let tmp = tempfile::tempdir().unwrap();
        let options = GenerateOptions {
            input: write_tracks(tmp.path(), 30),
            count: 2,
            seed: Some(1),
            allow_partial: true,
            ..Default::default()
        };
        let generated = generate(&options).unwrap();
        assert_eq!(generated.batch.tickets.len(), 2);
        assert_eq!(generated.batch.tracks.len(), 30);
        assert!(generated.summary.invalid_tickets > 0);
    }

    #[test]
    fn test_generate_rejects_bad_config() {
        let tmp = tempfile::tempdir().unwrap();
        let config = tmp.path().join("config.json");
        std::fs::write(&config, r#"{"max_attempts": 0}"#).unwrap();
        let options = GenerateOptions {
            input: write_tracks(tmp.path(), 90),
            count: 1,
            config: Some(config.to_string_lossy().into_owned()),
            ..Default::default()
        };
        let err = generate(&options).unwrap_err();
        assert_eq!(err.code, error_codes::INVALID_CONFIG);
        assert!(err.message.contains("max_attempts"));
    }

    #[test]
    fn test_render_tickets_lists_track_names() {
        let tmp = tempfile::tempdir().unwrap();
        let options = GenerateOptions {
            input: write_tracks(tmp.path(), 90),
            count: 2,
            seed: Some(3),
            ..Default::default()
        };
        let generated = generate(&options).unwrap();
        let text = render_tickets(&generated.batch);

        assert!(text.contains("TICKET-0001\n+----+"));
        assert!(text.contains("TICKET-0002\n+----+"));
        for track in generated.batch.tickets[1]
            .filled_cells()
            .filter_map(|cell| cell.track.as_ref())
        {
            assert!(text.contains(&format!("{:>3}  {}", track.id, track.name)));
        }
    }

    #[test]
    fn test_generate_missing_input() {
        let options = GenerateOptions {
            input: "/nonexistent/tracks.txt".to_string(),
            count: 1,
            ..Default::default()
        };
        let err = generate(&options).unwrap_err();
        assert_eq!(err.code, error_codes::FILE_READ);
    }
}
