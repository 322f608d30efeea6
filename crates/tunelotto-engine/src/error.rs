//! Error types for the ticket engine.
//!
//! Generation and validation never fail: exhausted retries fall back to a
//! fixed template and invariant violations are reported as data. Only
//! configuration can be rejected.

use thiserror::Error;

/// Errors raised while loading or checking a [`GeneratorConfig`](crate::GeneratorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
    #[error("{field} must be a finite value in [0, 1], got {value}")]
    WeightOutOfRange { field: String, value: f64 },
    #[error("priority tier {index} does not have a lower urgency threshold than the tier before it")]
    TiersNotDescending { index: usize },
    #[error("repair.replacements_per_ticket must be at least 1")]
    ZeroReplacements,
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::ZeroAttempts => "CONFIG_001",
            ConfigError::WeightOutOfRange { .. } => "CONFIG_002",
            ConfigError::TiersNotDescending { .. } => "CONFIG_003",
            ConfigError::ZeroReplacements => "CONFIG_004",
            ConfigError::Json(_) => "CONFIG_005",
        }
    }
}
