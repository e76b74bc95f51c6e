use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use casemap_core::types::Category;

/// Paraphrase lists keyed by canonical term.
pub type TermTable = BTreeMap<String, Vec<String>>;

/// The on-disk shape of the taxonomy data file:
/// category → sub-bucket/framework → canonical term → paraphrases.
///
/// Extending the taxonomy is a data-only change; nothing here is code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyData {
    /// Data table version, logged at load.
    #[serde(default)]
    pub version: String,
    pub categories: BTreeMap<Category, BTreeMap<String, TermTable>>,
}

impl TaxonomyData {
    /// Total number of canonical terms across all categories.
    pub fn term_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|buckets| buckets.values())
            .map(|terms| terms.len())
            .sum()
    }
}
