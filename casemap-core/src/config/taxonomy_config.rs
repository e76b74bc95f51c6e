use serde::{Deserialize, Serialize};

use super::defaults;

/// Taxonomy store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Path to a taxonomy JSON file. `None` uses the embedded table.
    pub data_path: Option<String>,
    /// When true, phrases no tier can place become Unmapped matches at
    /// confidence 0.0 instead of being dropped.
    pub unmapped_fallback: bool,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            unmapped_fallback: defaults::DEFAULT_UNMAPPED_FALLBACK,
        }
    }
}
