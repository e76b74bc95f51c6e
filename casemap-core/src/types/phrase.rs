use serde::{Deserialize, Serialize};

use super::SourceTag;

/// What kind of span the extractor recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseKind {
    NamedEntity,
    NounPhrase,
    BusinessVerb,
}

/// A candidate text span produced by the extractor.
///
/// Request-scoped: lives for the length of one resolution request and is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePhrase {
    /// The span text as it appeared in the input (pre-normalization).
    pub text: String,
    pub kind: PhraseKind,
    pub source: SourceTag,
}

impl CandidatePhrase {
    pub fn new(text: impl Into<String>, kind: PhraseKind, source: SourceTag) -> Self {
        Self {
            text: text.into(),
            kind,
            source,
        }
    }
}
