use serde::{Deserialize, Serialize};

use super::Category;

/// A single canonical concept in the taxonomy.
///
/// Identified by (category, framework, canonical_term). Immutable once
/// loaded; owned exclusively by the taxonomy store — matches carry clones
/// of the fields they need, never references into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub category: Category,
    /// Sub-bucket or framework name ("TCE", "MarketStrategy", ...).
    /// `None` for flat categories.
    pub framework: Option<String>,
    /// The authoritative name for the concept.
    pub canonical_term: String,
    /// Accepted alternate surface forms, as they appear in the data table.
    pub paraphrases: Vec<String>,
}

impl TaxonomyEntry {
    /// All surface forms this entry answers to: the canonical term first,
    /// then each paraphrase.
    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical_term.as_str())
            .chain(self.paraphrases.iter().map(String::as_str))
    }
}
