//! # casemap-extract
//!
//! Turns raw case/question/user text into source-tagged candidate phrases:
//! gazetteer-backed named entities, stop-word-delimited noun phrases, and
//! curated business verbs. Empty text yields an empty sequence, never an
//! error; failures are scoped to the input they occurred on.

pub mod entities;
pub mod extractor;
pub mod phrases;
pub mod tokenizer;
pub mod verbs;

pub use extractor::Extractor;
pub use tokenizer::{Token, Tokenizer};

// The normalizer is shared with the taxonomy index; it lives in core and
// is re-exported here as part of the extraction surface.
pub use casemap_core::text::{is_noise, normalize};
