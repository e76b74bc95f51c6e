use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Term resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Fuzzy tier threshold, on the fuzzy scorers' native 0–100 scale.
    /// Rescaled to [0, 1] only after the comparison, never mixed.
    pub fuzzy_threshold: f64,
    /// Semantic tier threshold, on the canonical 0–1 scale.
    pub semantic_threshold: f64,
    /// Opt-in: proceed with exact/fuzzy-only results when the embedding
    /// backend is unavailable, recording a degradation event.
    pub allow_degraded: bool,
}

impl ResolveConfig {
    /// Reject thresholds configured outside their documented scales.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.fuzzy_threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                name: "resolve.fuzzy_threshold",
                value: self.fuzzy_threshold,
                min: 0.0,
                max: 100.0,
            });
        }
        if !(0.0..=1.0).contains(&self.semantic_threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                name: "resolve.semantic_threshold",
                value: self.semantic_threshold,
                min: 0.0,
                max: 1.0,
            });
        }
        Ok(())
    }
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: defaults::DEFAULT_FUZZY_THRESHOLD,
            semantic_threshold: defaults::DEFAULT_SEMANTIC_THRESHOLD,
            allow_degraded: defaults::DEFAULT_ALLOW_DEGRADED,
        }
    }
}
