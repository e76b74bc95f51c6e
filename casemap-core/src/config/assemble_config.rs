use serde::{Deserialize, Serialize};

use super::defaults;

/// Answer assembler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssembleConfig {
    /// Maximum words before the answer is truncated with an ellipsis.
    pub max_words: usize,
    /// Rendered when the concept set is empty.
    pub no_concepts_message: String,
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self {
            max_words: defaults::DEFAULT_MAX_WORDS,
            no_concepts_message: defaults::DEFAULT_NO_CONCEPTS_MESSAGE.to_string(),
        }
    }
}
