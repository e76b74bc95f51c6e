//! AnalysisPipeline: orchestrates the full request flow.

use tracing::{debug, info};

use casemap_assemble::{AssembleOptions, Assembler};
use casemap_core::config::CasemapConfig;
use casemap_core::errors::{CasemapResult, ExtractError};
use casemap_core::types::{ConceptSet, DegradationEvent, SourceTag};
use casemap_extract::Extractor;
use casemap_resolve::{aggregate, EmbeddingEngine, Resolver};
use casemap_taxonomy::TaxonomyStore;

/// One analysis request: the raw input texts plus assembly options.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest<'a> {
    pub case_text: &'a str,
    pub question_text: &'a str,
    /// Optional extra material supplied by the user.
    pub user_inputs_text: Option<&'a str>,
    pub options: AssembleOptions,
}

/// Everything a request produces.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// The assembled answer text.
    pub answer: String,
    /// The resolved, deduplicated, confidence-ordered concept set.
    pub concepts: ConceptSet,
    /// Frameworks that contributed template sections, in section order.
    pub frameworks: Vec<String>,
    /// Per-input extraction failures. Non-fatal: other inputs proceeded.
    pub extract_errors: Vec<ExtractError>,
    /// Fallback paths taken during this request.
    pub degradation_events: Vec<DegradationEvent>,
}

/// The pipeline. Build once, run per request.
pub struct AnalysisPipeline<'a> {
    extractor: Extractor,
    resolver: Resolver<'a>,
    assembler: Assembler,
    engine: &'a EmbeddingEngine,
}

impl<'a> AnalysisPipeline<'a> {
    pub fn new(
        taxonomy: &'a TaxonomyStore,
        engine: &'a EmbeddingEngine,
        config: &CasemapConfig,
    ) -> Self {
        Self {
            extractor: Extractor::new(&config.extract, taxonomy),
            resolver: Resolver::new(taxonomy, engine, config),
            assembler: Assembler::new(config.assemble.clone()),
            engine,
        }
    }

    /// Run the full pipeline for one request.
    ///
    /// Extraction failures are scoped to their input and reported in the
    /// outcome; resolution failures (an unavailable embedding backend
    /// outside degraded mode) fail the request.
    pub fn run(&self, request: &AnalysisRequest<'_>) -> CasemapResult<PipelineOutcome> {
        let mut inputs: Vec<(SourceTag, &str)> = vec![
            (SourceTag::Case, request.case_text),
            (SourceTag::Question, request.question_text),
        ];
        if let Some(user_inputs) = request.user_inputs_text {
            inputs.push((SourceTag::UserInputs, user_inputs));
        }

        let (phrases, extract_errors) = self.extractor.extract_all(&inputs);
        debug!(
            phrases = phrases.len(),
            failed_inputs = extract_errors.len(),
            "extraction stage complete"
        );

        let matches = self.resolver.resolve_all(&phrases)?;
        let concepts = aggregate(matches);

        let frameworks = self.assembler.known_frameworks(&concepts);
        let answer = self
            .assembler
            .assemble(&concepts, &frameworks, &request.options);

        let degradation_events = self.engine.drain_degradation_events();

        info!(
            concepts = concepts.len(),
            frameworks = frameworks.len(),
            degradations = degradation_events.len(),
            "pipeline complete"
        );

        Ok(PipelineOutcome {
            answer,
            concepts,
            frameworks,
            extract_errors,
            degradation_events,
        })
    }
}
