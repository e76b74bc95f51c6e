use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level taxonomy category.
///
/// Categories form a closed set: new concepts extend the data table under
/// one of these buckets, never the enum itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Named strategic-theory frameworks (TCE, RBV, platform strategy, ...).
    StrategicTheory,
    /// General business concepts grouped into sub-buckets.
    BusinessConcept,
    /// Case-specific proper nouns: companies, products, facilities.
    IndustryContext,
    /// Terms held out until categorised.
    Ambiguous,
    /// Fallback bucket for phrases no tier could place (policy-gated).
    Unmapped,
}

impl Category {
    /// Human-readable label used in assembled prose.
    pub fn label(self) -> &'static str {
        match self {
            Category::StrategicTheory => "strategic theory",
            Category::BusinessConcept => "business concept",
            Category::IndustryContext => "industry context",
            Category::Ambiguous => "ambiguous",
            Category::Unmapped => "unmapped",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
