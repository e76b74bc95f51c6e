pub mod category;
pub mod concept_match;
pub mod concept_set;
pub mod confidence;
pub mod degradation;
pub mod entry;
pub mod phrase;
pub mod source;

pub use category::Category;
pub use concept_match::{ConceptMatch, MatchMethod};
pub use concept_set::ConceptSet;
pub use confidence::Confidence;
pub use degradation::DegradationEvent;
pub use entry::TaxonomyEntry;
pub use phrase::{CandidatePhrase, PhraseKind};
pub use source::{EntityKind, SourceTag};
