//! TuneLotto CLI - Command-line interface for music bingo tickets
//!
//! This binary generates ticket batches from a track list, re-validates
//! batch files and checks track lists before generation.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use tunelotto_cli::commands;
use tunelotto_cli::commands::generate::GenerateOptions;

/// TuneLotto - Music Bingo Ticket Generator
#[derive(Parser)]
#[command(name = "tunelotto")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log engine decisions to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of tickets from a track list
    Generate {
        /// Track list, one title per line (`-` for stdin)
        #[arg(short, long)]
        input: String,

        /// Number of tickets to generate
        #[arg(short, long, default_value_t = 10)]
        count: usize,

        /// Seed for reproducible batches (random when omitted)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Generator config file (JSON)
        #[arg(long)]
        config: Option<String>,

        /// Write the batch file here
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,

        /// Generate even if the track list has fewer than 90 entries
        #[arg(long)]
        allow_partial: bool,
    },

    /// Validate a batch file written by `generate --output`
    Validate {
        /// Path to the batch file (`-` for stdin)
        #[arg(short, long)]
        batch: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check whether a track list is ready for generation
    Check {
        /// Track list, one title per line (`-` for stdin)
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            input,
            count,
            seed,
            config,
            output,
            json,
            allow_partial,
        } => {
            let options = GenerateOptions {
                input,
                count,
                seed,
                config,
                output,
                allow_partial,
            };
            commands::generate::run(&options, json)
        }
        Commands::Validate { batch, json } => commands::validate::run(&batch, json),
        Commands::Check { input, json } => commands::check::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
