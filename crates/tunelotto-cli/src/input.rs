//! Input loading for track lists, generator configs and batch files.
//!
//! Every loader takes a path string; `-` means standard input.

use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::debug;
use tunelotto_engine::{parse_tracks, ConfigError, GeneratorConfig, Track};

use crate::batch::TicketBatch;
use crate::commands::json_output::error_codes;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Errors that can occur while loading input.
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// Standard input could not be read.
    #[error("failed to read standard input: {0}")]
    Stdin(std::io::Error),

    /// A batch file is not valid JSON or has the wrong shape.
    #[error("failed to parse '{path}': {source}")]
    JsonParse {
        path: String,
        source: serde_json::Error,
    },

    /// A config file failed to parse or validate.
    #[error("invalid config '{path}': {source}")]
    Config { path: String, source: ConfigError },
}

impl InputError {
    /// Stable error code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileRead { .. } | InputError::Stdin(_) => error_codes::FILE_READ,
            InputError::JsonParse { .. } => error_codes::JSON_PARSE,
            InputError::Config { .. } => error_codes::INVALID_CONFIG,
        }
    }
}

/// Reads a whole file, or standard input for `-`.
pub fn read_source(path: &str) -> Result<String, InputError> {
    if path == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(InputError::Stdin)?;
        return Ok(content);
    }
    std::fs::read_to_string(Path::new(path)).map_err(|source| InputError::FileRead {
        path: path.to_string(),
        source,
    })
}

/// Loads a track list: one title per line, blank lines ignored.
pub fn load_tracks(path: &str) -> Result<Vec<Track>, InputError> {
    let raw = read_source(path)?;
    let tracks = parse_tracks(&raw);
    debug!(path, count = tracks.len(), "loaded tracks");
    Ok(tracks)
}

/// Loads a generator config, or the defaults when no path is given.
pub fn load_config(path: Option<&str>) -> Result<GeneratorConfig, InputError> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let content = read_source(path)?;
    GeneratorConfig::from_json_str(&content).map_err(|source| InputError::Config {
        path: path.to_string(),
        source,
    })
}

/// Loads a ticket batch written by `generate --output`.
pub fn load_batch(path: &str) -> Result<TicketBatch, InputError> {
    let content = read_source(path)?;
    serde_json::from_str(&content).map_err(|source| InputError::JsonParse {
        path: path.to_string(),
        source,
    })
}
