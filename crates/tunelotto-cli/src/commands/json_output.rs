//! JSON output types for machine-readable CLI output.
//!
//! Every command prints exactly one of these objects to stdout when `--json`
//! is given.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tunelotto_engine::{PoolCheck, Ticket, Track, ValidationSummary};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Config problems pass through as `CONFIG_XXX` in the message.
pub mod error_codes {
    /// File or stdin could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Config file rejected
    pub const INVALID_CONFIG: &str = "CLI_003";
    /// Track pool is not complete
    pub const POOL_NOT_READY: &str = "CLI_004";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_005";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_006";
    /// Batch file format is newer than this build
    pub const UNSUPPORTED_FORMAT: &str = "CLI_007";
    /// Stored batch hash does not match the tickets
    pub const HASH_MISMATCH: &str = "CLI_008";
    /// One or more tickets failed validation
    pub const INVALID_TICKETS: &str = "CLI_009";
}

/// A command failure with a stable code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CommandError {
    pub code: &'static str,
    pub message: String,
}

impl CommandError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<InputError> for CommandError {
    fn from(err: InputError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(error_codes::JSON_SERIALIZE, err.to_string())
    }
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Ticket the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            ticket_id: None,
        }
    }

    /// Sets the ticket this error refers to.
    pub fn with_ticket(mut self, ticket_id: impl Into<String>) -> Self {
        self.ticket_id = Some(ticket_id.into());
        self
    }
}

impl From<CommandError> for JsonError {
    fn from(err: CommandError) -> Self {
        Self::new(err.code, err.message)
    }
}

/// Converts failing tickets of a summary into JSON errors, one per message.
pub fn summary_to_json_errors(summary: &ValidationSummary) -> Vec<JsonError> {
    summary
        .invalid_details
        .iter()
        .flat_map(|result| {
            result.errors.messages().into_iter().map(move |message| {
                JsonError::new(error_codes::INVALID_TICKETS, message)
                    .with_ticket(result.ticket_id.clone())
            })
        })
        .collect()
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether every ticket passed validation
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Generation details (when tickets were produced)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

/// Generation details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Seed used for the batch
    pub seed: u32,
    /// BLAKE3 hash of the tickets
    pub batch_hash: String,
    /// Validation of the generated tickets
    pub summary: ValidationSummary,
    /// Tracks on no ticket
    pub missed_tracks: Vec<Track>,
    /// Path the batch was written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// The tickets, when no output file was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<Ticket>>,
}

impl GenerateOutput {
    /// Creates an output for a finished batch.
    pub fn finished(result: GenerateResult) -> Self {
        let errors = summary_to_json_errors(&result.summary);
        Self {
            success: errors.is_empty(),
            errors,
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether all tickets are valid and the hash matches
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Validation details (when the batch could be read)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ValidateResult>,
}

/// Validation details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    /// Seed recorded in the batch
    pub seed: u32,
    /// Hash recorded in the batch
    pub batch_hash: String,
    /// Whether the recorded hash matches the tickets
    pub hash_matches: bool,
    /// Ticket validation
    pub summary: ValidationSummary,
    /// Tracks on no ticket
    pub missed_tracks: Vec<Track>,
}

impl ValidateOutput {
    /// Creates an output for a checked batch.
    pub fn checked(result: ValidateResult) -> Self {
        let mut errors = summary_to_json_errors(&result.summary);
        if !result.hash_matches {
            errors.push(JsonError::new(
                error_codes::HASH_MISMATCH,
                "batch hash does not match the tickets",
            ));
        }
        Self {
            success: errors.is_empty(),
            errors,
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `check` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutput {
    /// Whether the pool is ready
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Pool readiness (when the input could be read)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PoolCheck>,
}

impl CheckOutput {
    /// Creates an output for a checked pool.
    pub fn checked(pool: PoolCheck) -> Self {
        let errors = if pool.is_ready() {
            Vec::new()
        } else {
            vec![JsonError::new(
                error_codes::POOL_NOT_READY,
                pool.status.to_string(),
            )]
        };
        Self {
            success: errors.is_empty(),
            errors,
            result: Some(pool),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
