use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider name: "lexical" or "remote".
    pub provider: String,
    /// Vector dimensionality.
    pub dimensions: usize,
    /// Endpoint for the remote provider.
    pub endpoint: Option<String>,
    /// Max entries in the vector cache.
    pub cache_size: u64,
    /// When true, an unavailable primary provider is an error instead of
    /// falling back to the lexical provider.
    pub strict_provider: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            endpoint: None,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
            strict_provider: defaults::DEFAULT_STRICT_PROVIDER,
        }
    }
}
