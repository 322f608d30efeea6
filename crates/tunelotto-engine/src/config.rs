//! Generator configuration.
//!
//! Every tunable of the generator lives here. Defaults: 100 attempts per
//! ticket, a 0.3 default priority weight, three urgency tiers over a 0.1
//! baseline for batch generation and up to five coverage swaps per repaired
//! ticket.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One urgency tier: if `urgency > min_urgency`, use `weight`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityTier {
    /// Exclusive lower bound on `unused / coverable`.
    pub min_urgency: f64,
    /// Priority weight applied above the bound.
    pub weight: f64,
}

impl PriorityTier {
    /// Creates a tier applying `weight` above `min_urgency`.
    pub const fn new(min_urgency: f64, weight: f64) -> Self {
        Self {
            min_urgency,
            weight,
        }
    }
}

/// How batch generation weighs still-unused tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityConfig {
    /// Tiers checked in order; thresholds must be strictly descending.
    pub tiers: Vec<PriorityTier>,
    /// Weight when no tier matches or nothing is unused.
    pub baseline_weight: f64,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            tiers: Self::DEFAULT_TIERS.to_vec(),
            baseline_weight: Self::DEFAULT_BASELINE_WEIGHT,
        }
    }
}

impl PriorityConfig {
    /// Default urgency tiers.
    pub const DEFAULT_TIERS: [PriorityTier; 3] = [
        PriorityTier::new(0.5, 0.9),
        PriorityTier::new(0.3, 0.6),
        PriorityTier::new(0.15, 0.3),
    ];

    /// Default baseline weight.
    pub const DEFAULT_BASELINE_WEIGHT: f64 = 0.1;

    /// Picks the weight for a batch step.
    ///
    /// `unused` is the number of tracks not yet on any ticket and `coverable`
    /// the number of cells the remaining tickets can still fill.
    pub fn weight_for(&self, unused: usize, coverable: usize) -> f64 {
        if unused == 0 {
            return self.baseline_weight;
        }
        let urgency = unused as f64 / coverable.max(1) as f64;
        self.tiers
            .iter()
            .find(|tier| urgency > tier.min_urgency)
            .map_or(self.baseline_weight, |tier| tier.weight)
    }
}

/// Coverage repair settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairConfig {
    /// Maximum swaps applied to a single ticket.
    pub replacements_per_ticket: usize,
    /// Continue into older tickets once the recent window is exhausted.
    pub sweep_all_tickets: bool,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            replacements_per_ticket: Self::DEFAULT_REPLACEMENTS_PER_TICKET,
            sweep_all_tickets: true,
        }
    }
}

impl RepairConfig {
    /// Default swap limit per ticket.
    pub const DEFAULT_REPLACEMENTS_PER_TICKET: usize = 5;
}

/// Complete generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Randomized attempts per ticket before the fixed template is used.
    pub max_attempts: usize,
    /// Weight used when a caller passes a priority set without a weight.
    pub default_priority_weight: f64,
    /// Batch priority tiers.
    pub priority: PriorityConfig,
    /// Coverage repair settings.
    pub repair: RepairConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            default_priority_weight: Self::DEFAULT_PRIORITY_WEIGHT,
            priority: PriorityConfig::default(),
            repair: RepairConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Default attempts per ticket.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

    /// Default priority weight for single tickets.
    pub const DEFAULT_PRIORITY_WEIGHT: f64 = 0.3;

    /// Parses a JSON config and validates it. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks all bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        check_weight("default_priority_weight", self.default_priority_weight)?;
        check_weight("priority.baseline_weight", self.priority.baseline_weight)?;
        for (index, tier) in self.priority.tiers.iter().enumerate() {
            check_weight(&format!("priority.tiers[{}].weight", index), tier.weight)?;
            if !tier.min_urgency.is_finite() {
                return Err(ConfigError::WeightOutOfRange {
                    field: format!("priority.tiers[{}].min_urgency", index),
                    value: tier.min_urgency,
                });
            }
        }
        for (index, pair) in self.priority.tiers.windows(2).enumerate() {
            if pair[1].min_urgency >= pair[0].min_urgency {
                return Err(ConfigError::TiersNotDescending { index: index + 1 });
            }
        }
        if self.repair.replacements_per_ticket == 0 {
            return Err(ConfigError::ZeroReplacements);
        }
        Ok(())
    }
}

fn check_weight(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::WeightOutOfRange {
            field: field.to_string(),
            value,
        })
    }
}
