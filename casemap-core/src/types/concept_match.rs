use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Category, Confidence, SourceTag};

/// Which tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    Exact,
    Fuzzy,
    Semantic,
    /// Policy-gated fallback for phrases no tier could place.
    Unmapped,
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchMethod::Exact => "exact",
            MatchMethod::Fuzzy => "fuzzy",
            MatchMethod::Semantic => "semantic",
            MatchMethod::Unmapped => "unmapped",
        };
        f.write_str(s)
    }
}

/// A resolved (phrase → taxonomy entry) pairing with provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptMatch {
    /// Canonical term of the matched taxonomy entry.
    pub canonical_term: String,
    pub category: Category,
    /// Framework of the matched entry, if it lives under one.
    pub framework: Option<String>,
    /// The surface text that matched, as extracted from the input.
    pub surface: String,
    pub confidence: Confidence,
    pub method: MatchMethod,
    pub source: SourceTag,
}

impl ConceptMatch {
    /// The dedup identity: two matches collide only when both the
    /// canonical term and the source agree.
    pub fn dedup_key(&self) -> (&str, SourceTag) {
        (self.canonical_term.as_str(), self.source)
    }
}
