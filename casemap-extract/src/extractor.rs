//! The extraction facade: one pass per input text, emitting source-tagged
//! candidate phrases in a fixed order (entities, noun phrases, verbs).

use tracing::debug;

use casemap_core::config::ExtractConfig;
use casemap_core::errors::ExtractError;
use casemap_core::types::{CandidatePhrase, PhraseKind, SourceTag};
use casemap_taxonomy::TaxonomyStore;

use crate::entities::EntityRecognizer;
use crate::phrases::noun_phrases;
use crate::tokenizer::Tokenizer;
use crate::verbs::VerbMatcher;

/// Candidate-phrase extractor.
///
/// Built once per process from config plus the taxonomy's IndustryContext
/// gazetteer, then reused across requests.
pub struct Extractor {
    tokenizer: Tokenizer,
    entities: EntityRecognizer,
    verbs: VerbMatcher,
    min_phrase_chars: usize,
}

impl Extractor {
    pub fn new(config: &ExtractConfig, taxonomy: &TaxonomyStore) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            entities: EntityRecognizer::new(taxonomy.gazetteer(), &config.entity_kinds),
            verbs: VerbMatcher::new(&config.business_verbs),
            min_phrase_chars: config.min_phrase_chars,
        }
    }

    /// Extract candidate phrases from one input text.
    ///
    /// Empty text yields an empty vector, not an error. The error path is
    /// reserved for inputs that cannot be read as prose at all.
    pub fn extract(
        &self,
        text: &str,
        source: SourceTag,
    ) -> Result<Vec<CandidatePhrase>, ExtractError> {
        if text.contains('\u{FFFD}') {
            // Lossy document conversion upstream; matching against
            // mangled text would attribute nonsense to this source.
            return Err(ExtractError::InputFailed {
                input: source,
                reason: "text contains U+FFFD replacement characters".to_string(),
            });
        }

        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut out = Vec::new();

        for entity in self.entities.recognize(text, &tokens) {
            out.push(CandidatePhrase::new(
                entity.text,
                PhraseKind::NamedEntity,
                source,
            ));
        }

        for phrase in noun_phrases(text, &tokens, self.min_phrase_chars) {
            out.push(CandidatePhrase::new(phrase, PhraseKind::NounPhrase, source));
        }

        for token in &tokens {
            if self.verbs.match_token(&token.lower).is_some() {
                out.push(CandidatePhrase::new(
                    token.text.clone(),
                    PhraseKind::BusinessVerb,
                    source,
                ));
            }
        }

        debug!(
            source = %source,
            tokens = tokens.len(),
            phrases = out.len(),
            "extraction complete"
        );

        Ok(out)
    }

    /// Extract from several inputs, scoping failures to the input they
    /// occurred on: one bad input never aborts the others.
    pub fn extract_all(
        &self,
        inputs: &[(SourceTag, &str)],
    ) -> (Vec<CandidatePhrase>, Vec<ExtractError>) {
        let mut phrases = Vec::new();
        let mut errors = Vec::new();

        for (source, text) in inputs {
            match self.extract(text, *source) {
                Ok(mut found) => phrases.append(&mut found),
                Err(e) => errors.push(e),
            }
        }

        (phrases, errors)
    }
}
