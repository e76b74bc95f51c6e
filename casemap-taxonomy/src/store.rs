//! TaxonomyStore — flat entries, exact-lookup index, gazetteer view.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use casemap_core::errors::TaxonomyError;
use casemap_core::text::normalize;
use casemap_core::types::{Category, EntityKind, TaxonomyEntry};

use crate::record::TaxonomyData;

/// The embedded default table.
const DEFAULT_TAXONOMY_JSON: &str = include_str!("../data/taxonomy.json");

/// An IndustryContext surface form with the entity kind its bucket implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GazetteerTerm {
    /// Normalized surface form.
    pub phrase: String,
    pub kind: EntityKind,
}

/// The loaded taxonomy.
///
/// Immutable after construction: loaded once at process start and shared
/// read-only across all resolution requests. Matching works off two views
/// of the same entries — a normalized surface-form index for the exact
/// tier, and the flat entry list for fuzzy/semantic scans.
#[derive(Debug)]
pub struct TaxonomyStore {
    entries: Vec<TaxonomyEntry>,
    /// normalized canonical term or paraphrase → index into `entries`.
    exact: HashMap<String, usize>,
    version: String,
    loaded_at: DateTime<Utc>,
}

impl TaxonomyStore {
    /// Load the embedded default table.
    pub fn load_default() -> Result<Self, TaxonomyError> {
        Self::from_json(DEFAULT_TAXONOMY_JSON)
    }

    /// Load from a JSON string. Malformed tables are fatal.
    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        let data: TaxonomyData = serde_json::from_str(json)?;
        Self::build(data)
    }

    /// Load from a file path. A missing file is fatal.
    pub fn from_path(path: &Path) -> Result<Self, TaxonomyError> {
        let json = std::fs::read_to_string(path).map_err(|e| TaxonomyError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    fn build(data: TaxonomyData) -> Result<Self, TaxonomyError> {
        let mut entries: Vec<TaxonomyEntry> = Vec::with_capacity(data.term_count());
        let mut exact: HashMap<String, usize> = HashMap::new();

        for (category, buckets) in &data.categories {
            for (framework, terms) in buckets {
                for (canonical_term, paraphrases) in terms {
                    let entry = TaxonomyEntry {
                        category: *category,
                        framework: Some(framework.clone()),
                        canonical_term: canonical_term.clone(),
                        paraphrases: paraphrases.clone(),
                    };
                    let idx = entries.len();

                    for form in entry.surface_forms() {
                        let key = normalize(form);
                        if key.is_empty() {
                            return Err(TaxonomyError::Validation {
                                reason: format!(
                                    "empty surface form on '{canonical_term}' in {category:?}/{framework}"
                                ),
                            });
                        }
                        if let Some(&prior) = exact.get(&key) {
                            // `prior == idx` means the entry repeats one of
                            // its own forms (canonical listed as paraphrase).
                            let prior_term = if prior == idx {
                                canonical_term.as_str()
                            } else {
                                entries[prior].canonical_term.as_str()
                            };
                            return Err(TaxonomyError::Validation {
                                reason: format!(
                                    "surface form '{key}' maps to both '{prior_term}' and '{canonical_term}'"
                                ),
                            });
                        }
                        exact.insert(key, idx);
                    }

                    entries.push(entry);
                }
            }
        }

        let store = Self {
            entries,
            exact,
            version: data.version,
            loaded_at: Utc::now(),
        };

        info!(
            version = %store.version,
            entries = store.entries.len(),
            surface_forms = store.exact.len(),
            "taxonomy loaded"
        );

        Ok(store)
    }

    /// Exact-tier lookup: a normalized phrase to its entry, if any surface
    /// form matches.
    pub fn lookup_exact(&self, normalized: &str) -> Option<&TaxonomyEntry> {
        self.exact.get(normalized).map(|&idx| &self.entries[idx])
    }

    /// The flat entry list, in deterministic load order. This is the scan
    /// order of the fuzzy and semantic tiers, which is what makes
    /// resolution deterministic for a fixed table.
    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    /// IndustryContext surface forms for the entity extractor, with kinds
    /// inferred from their bucket.
    pub fn gazetteer(&self) -> Vec<GazetteerTerm> {
        self.entries
            .iter()
            .filter(|e| e.category == Category::IndustryContext)
            .flat_map(|e| {
                let kind = bucket_entity_kind(e.framework.as_deref());
                e.surface_forms()
                    .map(move |form| GazetteerTerm {
                        phrase: normalize(form),
                        kind,
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Entity kind implied by an IndustryContext bucket name.
fn bucket_entity_kind(bucket: Option<&str>) -> EntityKind {
    match bucket {
        Some("Facilities") | Some("Projects") => EntityKind::Place,
        Some("ProductsAndSystems") | Some("DigitalTools") => EntityKind::Product,
        _ => EntityKind::Organization,
    }
}
