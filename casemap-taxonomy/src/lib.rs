//! # casemap-taxonomy
//!
//! The taxonomy store: parses the nested category → framework → term →
//! paraphrases table into flat typed records, and builds a normalized
//! surface-form index for O(1) exact lookup plus a flat list for
//! fuzzy/semantic scans. Loaded once at process start, read-only after.

pub mod record;
pub mod store;

pub use record::TaxonomyData;
pub use store::{GazetteerTerm, TaxonomyStore};
