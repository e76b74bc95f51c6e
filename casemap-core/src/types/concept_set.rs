use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Category, ConceptMatch, SourceTag};

/// The deduplicated, confidence-ordered list of matches for one request.
///
/// Invariants (established by the aggregator, preserved by every method
/// here): no two entries share the same (canonical_term, source) pair, and
/// entries are sorted by non-increasing confidence with first-seen order
/// breaking ties.
///
/// An empty set is a valid outcome, not an error: the assembler renders a
/// "no concepts detected" message for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptSet {
    matches: Vec<ConceptMatch>,
}

impl ConceptSet {
    /// Wrap an already aggregated (sorted + deduplicated) match list.
    pub fn from_ordered(matches: Vec<ConceptMatch>) -> Self {
        Self { matches }
    }

    pub fn matches(&self) -> &[ConceptMatch] {
        &self.matches
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConceptMatch> {
        self.matches.iter()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Keep only matches from the given source. Order is preserved.
    pub fn restrict_to_source(&self, source: SourceTag) -> Self {
        Self {
            matches: self
                .matches
                .iter()
                .filter(|m| m.source == source)
                .cloned()
                .collect(),
        }
    }

    /// Keep the `n` highest-confidence matches.
    pub fn top_n(&self, n: usize) -> Self {
        Self {
            matches: self.matches.iter().take(n).cloned().collect(),
        }
    }

    /// Sorted unique framework names across all matches.
    ///
    /// Drives template selection: one section per relevant framework.
    pub fn frameworks(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .matches
            .iter()
            .filter_map(|m| m.framework.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Group matches by category, preserving confidence order within each.
    pub fn by_category(&self) -> BTreeMap<Category, Vec<&ConceptMatch>> {
        let mut grouped: BTreeMap<Category, Vec<&ConceptMatch>> = BTreeMap::new();
        for m in &self.matches {
            grouped.entry(m.category).or_default().push(m);
        }
        grouped
    }

    pub fn into_matches(self) -> Vec<ConceptMatch> {
        self.matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Confidence, MatchMethod};

    fn m(term: &str, conf: f64, source: SourceTag, framework: Option<&str>) -> ConceptMatch {
        ConceptMatch {
            canonical_term: term.to_string(),
            category: Category::StrategicTheory,
            framework: framework.map(str::to_string),
            surface: term.to_string(),
            confidence: Confidence::new(conf),
            method: MatchMethod::Fuzzy,
            source,
        }
    }

    #[test]
    fn restrict_to_source_keeps_order() {
        let set = ConceptSet::from_ordered(vec![
            m("a", 0.9, SourceTag::Case, None),
            m("b", 0.8, SourceTag::Question, None),
            m("c", 0.7, SourceTag::Case, None),
        ]);
        let filtered = set.restrict_to_source(SourceTag::Case);
        let terms: Vec<&str> = filtered
            .iter()
            .map(|m| m.canonical_term.as_str())
            .collect();
        assert_eq!(terms, vec!["a", "c"]);
    }

    #[test]
    fn top_n_takes_prefix() {
        let set = ConceptSet::from_ordered(vec![
            m("a", 0.9, SourceTag::Case, None),
            m("b", 0.8, SourceTag::Case, None),
            m("c", 0.7, SourceTag::Case, None),
        ]);
        assert_eq!(set.top_n(2).len(), 2);
        assert_eq!(set.top_n(0).len(), 0);
        assert_eq!(set.top_n(10).len(), 3);
    }

    #[test]
    fn frameworks_sorted_unique() {
        let set = ConceptSet::from_ordered(vec![
            m("a", 0.9, SourceTag::Case, Some("TCE")),
            m("b", 0.8, SourceTag::Case, Some("PlatformStrategy")),
            m("c", 0.7, SourceTag::Case, Some("TCE")),
            m("d", 0.6, SourceTag::Case, None),
        ]);
        assert_eq!(set.frameworks(), vec!["PlatformStrategy", "TCE"]);
    }

    #[test]
    fn empty_set_is_valid() {
        let set = ConceptSet::default();
        assert!(set.is_empty());
        assert!(set.frameworks().is_empty());
        assert!(set.by_category().is_empty());
    }
}
