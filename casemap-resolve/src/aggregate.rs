//! Match aggregation: stable confidence ordering plus (canonical term,
//! source) deduplication. The same concept cited by both the case and the
//! question is two matches, not one — source attribution survives.

use std::collections::HashSet;

use tracing::debug;

use casemap_core::types::{ConceptMatch, ConceptSet, SourceTag};

/// Aggregate raw matches into a `ConceptSet`.
///
/// Sort is stable and by descending confidence, so equal-confidence
/// matches keep their first-seen order. Deduplication keeps the first
/// occurrence in sort order for each (canonical_term, source) pair.
pub fn aggregate(matches: Vec<ConceptMatch>) -> ConceptSet {
    let mut sorted = matches;
    sorted.sort_by(|a, b| {
        b.confidence
            .value()
            .partial_cmp(&a.confidence.value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let before = sorted.len();
    let mut seen: HashSet<(String, SourceTag)> = HashSet::new();
    sorted.retain(|m| seen.insert((m.canonical_term.clone(), m.source)));

    debug!(
        matches = sorted.len(),
        deduped = before - sorted.len(),
        "aggregation complete"
    );

    ConceptSet::from_ordered(sorted)
}
