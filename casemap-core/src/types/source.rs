use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin of an extracted phrase or a match.
///
/// Attribution survives the whole pipeline: deduplication treats the same
/// canonical term from two sources as two distinct matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTag {
    Case,
    Question,
    UserInputs,
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceTag::Case => "case",
            SourceTag::Question => "question",
            SourceTag::UserInputs => "user_inputs",
        };
        f.write_str(s)
    }
}

/// Named-entity kinds the extractor is allowed to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Organization,
    Product,
    Place,
}

impl EntityKind {
    /// The default allow-list: all recognized kinds.
    pub fn all() -> Vec<EntityKind> {
        vec![
            EntityKind::Organization,
            EntityKind::Product,
            EntityKind::Place,
        ]
    }
}
