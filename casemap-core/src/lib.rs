//! # casemap-core
//!
//! Foundation crate for the casemap concept-resolution engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod text;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CasemapConfig;
pub use errors::{CasemapError, CasemapResult};
pub use types::{
    CandidatePhrase, Category, ConceptMatch, ConceptSet, Confidence, MatchMethod, SourceTag,
    TaxonomyEntry,
};
