pub mod assemble_config;
pub mod defaults;
pub mod embedding_config;
pub mod extract_config;
pub mod resolve_config;
pub mod taxonomy_config;

pub use assemble_config::AssembleConfig;
pub use embedding_config::EmbeddingConfig;
pub use extract_config::ExtractConfig;
pub use resolve_config::ResolveConfig;
pub use taxonomy_config::TaxonomyConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration, one section per subsystem.
///
/// Every field has a documented default; an empty TOML document is a
/// valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CasemapConfig {
    pub taxonomy: TaxonomyConfig,
    pub extract: ExtractConfig,
    pub resolve: ResolveConfig,
    pub embedding: EmbeddingConfig,
    pub assemble: AssembleConfig,
}

impl CasemapConfig {
    /// Parse from TOML, filling missing fields with defaults and
    /// validating threshold scales.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.resolve.validate()?;
        Ok(config)
    }
}
