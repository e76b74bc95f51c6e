//! # casemap-pipeline
//!
//! The end-to-end request pipeline: extract candidate phrases from each
//! input, resolve them against the taxonomy, aggregate into a concept
//! set, and assemble the templated answer. Single-threaded, synchronous,
//! request-scoped — the taxonomy store and embedding engine are shared
//! read-only and held by reference.

pub mod engine;

pub use engine::{AnalysisPipeline, AnalysisRequest, PipelineOutcome};
