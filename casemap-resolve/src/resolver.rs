//! The three-tier resolution cascade: exact → fuzzy → semantic, strict
//! order, short-circuiting at the first tier that clears its threshold.

use tracing::{debug, warn};

use casemap_core::config::CasemapConfig;
use casemap_core::errors::{CasemapError, EmbeddingError, ResolveError};
use casemap_core::text::{is_noise, normalize};
use casemap_core::types::{
    CandidatePhrase, Category, ConceptMatch, Confidence, MatchMethod, PhraseKind, SourceTag,
    TaxonomyEntry,
};
use casemap_taxonomy::TaxonomyStore;

use crate::fuzzy;
use crate::semantic::{clamped_similarity, EmbeddingEngine};

/// Resolves candidate phrases against the taxonomy.
///
/// Holds references only: the store and engine are built once at process
/// start and shared read-only across requests. Resolution is
/// deterministic for a fixed taxonomy, fixed thresholds, and fixed input —
/// scan order is taxonomy load order and ties keep the first entry seen.
pub struct Resolver<'a> {
    taxonomy: &'a TaxonomyStore,
    engine: &'a EmbeddingEngine,
    /// Fuzzy threshold on the scorers' native 0–100 scale.
    fuzzy_threshold: f64,
    /// Semantic threshold on the canonical 0–1 scale.
    semantic_threshold: f64,
    allow_degraded: bool,
    unmapped_fallback: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(
        taxonomy: &'a TaxonomyStore,
        engine: &'a EmbeddingEngine,
        config: &CasemapConfig,
    ) -> Self {
        Self {
            taxonomy,
            engine,
            fuzzy_threshold: config.resolve.fuzzy_threshold,
            semantic_threshold: config.resolve.semantic_threshold,
            allow_degraded: config.resolve.allow_degraded,
            unmapped_fallback: config.taxonomy.unmapped_fallback,
        }
    }

    /// Resolve a single phrase.
    pub fn resolve(
        &self,
        text: &str,
        source: SourceTag,
    ) -> Result<Vec<ConceptMatch>, ResolveError> {
        let phrase = CandidatePhrase::new(text, PhraseKind::NounPhrase, source);
        self.resolve_all(std::slice::from_ref(&phrase))
    }

    /// Resolve a batch of phrases, one cascade per phrase.
    ///
    /// When the embedding backend is unavailable: fails the request with
    /// `ModelUnavailable`, unless degraded mode was requested — then the
    /// semantic tier is switched off for the remainder of the batch and a
    /// degradation event is recorded.
    pub fn resolve_all(
        &self,
        phrases: &[CandidatePhrase],
    ) -> Result<Vec<ConceptMatch>, ResolveError> {
        let mut semantic_enabled = true;
        let mut matches = Vec::new();

        for phrase in phrases {
            let normalized = normalize(&phrase.text);
            if is_noise(&normalized) {
                debug!(text = %phrase.text, "noise phrase skipped");
                continue;
            }

            // Tier 1: exact surface-form lookup.
            if let Some(entry) = self.taxonomy.lookup_exact(&normalized) {
                matches.push(entry_match(
                    entry,
                    phrase,
                    Confidence::new(Confidence::EXACT),
                    MatchMethod::Exact,
                ));
                continue;
            }

            // Tier 2: fuzzy scan over every surface form.
            if let Some((entry, score)) = self.best_fuzzy(&normalized) {
                if score >= self.fuzzy_threshold {
                    matches.push(entry_match(
                        entry,
                        phrase,
                        Confidence::from_percent(score),
                        MatchMethod::Fuzzy,
                    ));
                    continue;
                }
            }

            // Tier 3: semantic scan over canonical terms.
            if semantic_enabled {
                match self.best_semantic(&normalized) {
                    Ok(Some((entry, similarity))) if similarity >= self.semantic_threshold => {
                        matches.push(entry_match(
                            entry,
                            phrase,
                            Confidence::new(similarity),
                            MatchMethod::Semantic,
                        ));
                        continue;
                    }
                    Ok(_) => {}
                    Err(CasemapError::Embedding(EmbeddingError::ProviderUnavailable {
                        provider,
                    })) => {
                        if self.allow_degraded {
                            warn!(
                                provider = %provider,
                                "embedding backend down, continuing exact/fuzzy-only"
                            );
                            self.engine.record_degradation(
                                "resolver",
                                &format!("provider '{provider}' unavailable"),
                                "exact/fuzzy tiers only",
                            );
                            semantic_enabled = false;
                        } else {
                            return Err(ResolveError::ModelUnavailable {
                                reason: format!("embedding provider '{provider}' unavailable"),
                            });
                        }
                    }
                    Err(CasemapError::Embedding(e)) => return Err(ResolveError::Embedding(e)),
                    Err(other) => {
                        return Err(ResolveError::Embedding(EmbeddingError::InferenceFailed {
                            reason: other.to_string(),
                        }))
                    }
                }
            }

            // No tier fired.
            if self.unmapped_fallback {
                matches.push(unmapped_match(&normalized, phrase));
            }
        }

        debug!(
            phrases = phrases.len(),
            matches = matches.len(),
            "resolution complete"
        );

        Ok(matches)
    }

    /// Best fuzzy score across every canonical term and paraphrase.
    /// Strict `>` keeps the first-seen entry on ties.
    fn best_fuzzy(&self, normalized: &str) -> Option<(&TaxonomyEntry, f64)> {
        let mut best: Option<(&TaxonomyEntry, f64)> = None;
        for entry in self.taxonomy.entries() {
            for form in entry.surface_forms() {
                let score = fuzzy::combined_score(normalized, &normalize(form));
                if best.map_or(true, |(_, b)| score > b) {
                    best = Some((entry, score));
                }
            }
        }
        best
    }

    /// Best clamped cosine similarity against each canonical term.
    fn best_semantic(
        &self,
        normalized: &str,
    ) -> Result<Option<(&TaxonomyEntry, f64)>, CasemapError> {
        let query = self.engine.embed(normalized)?;

        let mut best: Option<(&TaxonomyEntry, f64)> = None;
        for entry in self.taxonomy.entries() {
            let term_vector = self.engine.embed(&normalize(&entry.canonical_term))?;
            let similarity = clamped_similarity(&query, &term_vector);
            if best.map_or(true, |(_, b)| similarity > b) {
                best = Some((entry, similarity));
            }
        }
        Ok(best)
    }
}

fn entry_match(
    entry: &TaxonomyEntry,
    phrase: &CandidatePhrase,
    confidence: Confidence,
    method: MatchMethod,
) -> ConceptMatch {
    ConceptMatch {
        canonical_term: entry.canonical_term.clone(),
        category: entry.category,
        framework: entry.framework.clone(),
        surface: phrase.text.clone(),
        confidence,
        method,
        source: phrase.source,
    }
}

fn unmapped_match(normalized: &str, phrase: &CandidatePhrase) -> ConceptMatch {
    ConceptMatch {
        canonical_term: normalized.to_string(),
        category: Category::Unmapped,
        framework: None,
        surface: phrase.text.clone(),
        confidence: Confidence::new(0.0),
        method: MatchMethod::Unmapped,
        source: phrase.source,
    }
}
