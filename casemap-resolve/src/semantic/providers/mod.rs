//! Embedding providers and provider selection.

pub mod lexical;
pub mod remote;

pub use lexical::LexicalProvider;
pub use remote::RemoteProvider;

use tracing::warn;

use casemap_core::config::EmbeddingConfig;
use casemap_core::traits::EmbeddingProvider;

/// Build the primary provider named in config.
///
/// Unknown names fall back to the lexical provider with a warning —
/// the chain (not this function) decides whether falling back is allowed.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn EmbeddingProvider> {
    match config.provider.as_str() {
        "lexical" => Box::new(LexicalProvider::new(config.dimensions)),
        "remote" => {
            let endpoint = config.endpoint.clone().unwrap_or_default();
            Box::new(RemoteProvider::new(&endpoint, config.dimensions))
        }
        other => {
            warn!(provider = other, "unknown embedding provider, using lexical");
            Box::new(LexicalProvider::new(config.dimensions))
        }
    }
}
