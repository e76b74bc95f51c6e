//! EmbeddingEngine — provider chain + vector cache behind one interface.
//!
//! Constructed once at process start and passed by reference into the
//! resolver: the explicit context object that replaces any process-global
//! model state. Read-only after construction apart from the cache and the
//! degradation log, both behind interior mutability.

use std::sync::Mutex;

use chrono::Utc;
use tracing::{info, warn};

use casemap_core::config::EmbeddingConfig;
use casemap_core::errors::{CasemapResult, EmbeddingError};
use casemap_core::traits::EmbeddingProvider;
use casemap_core::types::DegradationEvent;

use super::cache::{key_for, VectorCache};
use super::providers;

pub struct EmbeddingEngine {
    /// Providers in priority order; the first available one wins.
    chain: Vec<Box<dyn EmbeddingProvider>>,
    cache: VectorCache,
    dimensions: usize,
    events: Mutex<Vec<DegradationEvent>>,
}

impl EmbeddingEngine {
    /// Build the engine from configuration.
    ///
    /// With `strict_provider` off, the lexical provider is appended as the
    /// last resort, so the chain can always embed. With it on, the chain
    /// is exactly the configured provider — which is what makes a
    /// model-unavailable outcome reachable for callers that want it.
    pub fn new(config: &EmbeddingConfig) -> Self {
        let mut chain: Vec<Box<dyn EmbeddingProvider>> = Vec::new();
        chain.push(providers::create_provider(config));

        if !config.strict_provider && config.provider != "lexical" {
            chain.push(Box::new(providers::LexicalProvider::new(config.dimensions)));
        }

        let engine = Self {
            chain,
            cache: VectorCache::new(config.cache_size),
            dimensions: config.dimensions,
            events: Mutex::new(Vec::new()),
        };

        info!(
            provider = engine.active_provider(),
            dims = engine.dimensions,
            strict = config.strict_provider,
            "embedding engine initialized"
        );

        engine
    }

    /// Embed one text through the cache and the provider chain.
    pub fn embed(&self, text: &str) -> CasemapResult<Vec<f32>> {
        let key = key_for(text);
        if let Some(vector) = self.cache.get(&key) {
            return Ok(vector);
        }

        let mut last_error = None;

        for (i, provider) in self.chain.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }
            match provider.embed(text) {
                Ok(vector) if vector.len() == self.dimensions => {
                    if i > 0 {
                        self.record_fallback(provider.name());
                    }
                    self.cache.insert(key, vector.clone());
                    return Ok(vector);
                }
                Ok(vector) => {
                    warn!(
                        provider = provider.name(),
                        expected = self.dimensions,
                        actual = vector.len(),
                        "provider returned wrong dimensions, trying next in chain"
                    );
                    last_error = Some(
                        EmbeddingError::DimensionMismatch {
                            expected: self.dimensions,
                            actual: vector.len(),
                        }
                        .into(),
                    );
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "provider failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::ProviderUnavailable {
                provider: self
                    .chain
                    .first()
                    .map(|p| p.name().to_string())
                    .unwrap_or_else(|| "none".to_string()),
            }
            .into()
        }))
    }

    fn record_fallback(&self, fallback_name: &str) {
        let primary = self
            .chain
            .first()
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| "none".to_string());
        if let Ok(mut events) = self.events.lock() {
            events.push(DegradationEvent {
                component: "embeddings".to_string(),
                failure: format!("{primary} unavailable"),
                fallback_used: fallback_name.to_string(),
                timestamp: Utc::now(),
            });
        }
    }

    /// Drain accumulated degradation events.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }

    /// Record a degradation on behalf of a caller that decided to proceed
    /// without this engine (the resolver's opt-in degraded mode).
    pub fn record_degradation(&self, component: &str, failure: &str, fallback_used: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push(DegradationEvent {
                component: component.to_string(),
                failure: failure.to_string(),
                fallback_used: fallback_used.to_string(),
                timestamp: Utc::now(),
            });
        }
    }

    /// Name of the first available provider.
    pub fn active_provider(&self) -> &str {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Whether anything in the chain can embed right now.
    pub fn is_available(&self) -> bool {
        self.chain.iter().any(|p| p.is_available())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexical_engine() -> EmbeddingEngine {
        EmbeddingEngine::new(&EmbeddingConfig {
            provider: "lexical".to_string(),
            dimensions: 128,
            ..Default::default()
        })
    }

    #[test]
    fn engine_embeds_with_configured_dims() {
        let engine = lexical_engine();
        let v = engine.embed("switching costs").unwrap();
        assert_eq!(v.len(), 128);
    }

    #[test]
    fn repeated_embeds_hit_the_cache() {
        let engine = lexical_engine();
        let a = engine.embed("asset specificity").unwrap();
        let b = engine.embed("asset specificity").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn strict_unreachable_remote_is_unavailable() {
        let engine = EmbeddingEngine::new(&EmbeddingConfig {
            provider: "remote".to_string(),
            endpoint: None,
            strict_provider: true,
            ..Default::default()
        });
        assert!(!engine.is_available());
        assert!(engine.embed("anything").is_err());
    }

    #[test]
    fn non_strict_remote_falls_back_to_lexical() {
        let engine = EmbeddingEngine::new(&EmbeddingConfig {
            provider: "remote".to_string(),
            endpoint: None,
            strict_provider: false,
            ..Default::default()
        });
        assert!(engine.is_available());
        assert_eq!(engine.active_provider(), "lexical");
        let v = engine.embed("network effects").unwrap();
        assert_eq!(v.len(), engine.dimensions());
    }

    #[test]
    fn no_events_without_degradation() {
        let engine = lexical_engine();
        engine.embed("test").unwrap();
        assert!(engine.drain_degradation_events().is_empty());
    }

    #[test]
    fn drain_empties_the_log() {
        let engine = lexical_engine();
        engine.record_degradation("resolver", "semantic tier skipped", "exact/fuzzy only");
        assert_eq!(engine.drain_degradation_events().len(), 1);
        assert!(engine.drain_degradation_events().is_empty());
    }
}
