use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;
use crate::types::EntityKind;

/// Phrase extractor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Entity kinds the extractor may emit.
    pub entity_kinds: Vec<EntityKind>,
    /// Strategy-relevant verb lemmas.
    pub business_verbs: Vec<String>,
    /// Shortest phrase emitted, in characters.
    pub min_phrase_chars: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            entity_kinds: EntityKind::all(),
            business_verbs: constants::BUSINESS_VERBS
                .iter()
                .map(|v| v.to_string())
                .collect(),
            min_phrase_chars: defaults::DEFAULT_MIN_PHRASE_CHARS,
        }
    }
}
