//! The assembler proper: filters, section rendering, truncation.

use tracing::{debug, warn};

use casemap_core::config::AssembleConfig;
use casemap_core::types::{ConceptSet, SourceTag};

use crate::sentences::concept_sentences;
use crate::templates::{TemplateLibrary, CONCEPT_SENTENCES_PLACEHOLDER};
use crate::truncate::truncate_words;

/// Caller-facing assembly options.
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// Keep only matches attributed to the question text.
    pub only_question: bool,
    /// Cap to the N highest-confidence matches.
    pub top_n: Option<usize>,
    /// Style note prefixed verbatim to the answer.
    pub style_preamble: Option<String>,
}

/// Renders concept sets into templated prose. Never fails: an empty set
/// renders the configured no-concepts message.
pub struct Assembler {
    library: TemplateLibrary,
    config: AssembleConfig,
}

impl Assembler {
    pub fn new(config: AssembleConfig) -> Self {
        Self {
            library: TemplateLibrary::builtin(),
            config,
        }
    }

    pub fn with_library(config: AssembleConfig, library: TemplateLibrary) -> Self {
        Self { library, config }
    }

    /// Frameworks from the concept set that have a template bundle, in
    /// sorted order — the default section order when the caller has no
    /// preference of its own.
    pub fn known_frameworks(&self, concepts: &ConceptSet) -> Vec<String> {
        concepts
            .frameworks()
            .into_iter()
            .filter(|f| self.library.contains(f))
            .collect()
    }

    /// Assemble the answer: one section per framework in caller-supplied
    /// order, concept sentences substituted into each analysis section,
    /// the whole truncated to the configured word limit.
    pub fn assemble(
        &self,
        concepts: &ConceptSet,
        frameworks: &[String],
        options: &AssembleOptions,
    ) -> String {
        let mut filtered = concepts.clone();
        if options.only_question {
            filtered = filtered.restrict_to_source(SourceTag::Question);
        }
        if let Some(n) = options.top_n {
            filtered = filtered.top_n(n);
        }

        if filtered.is_empty() {
            return self.config.no_concepts_message.clone();
        }

        let prose = concept_sentences(&filtered);
        let mut sections: Vec<String> = Vec::new();

        if let Some(style) = &options.style_preamble {
            if !style.is_empty() {
                sections.push(format!("[{style}]"));
            }
        }

        let mut rendered_any = false;
        for framework in frameworks {
            match self.library.get(framework) {
                Ok(bundle) => {
                    sections.push(bundle.intro.clone());
                    sections.push(
                        bundle
                            .analysis
                            .replace(CONCEPT_SENTENCES_PLACEHOLDER, &prose),
                    );
                    sections.push(bundle.conclusion.clone());
                    rendered_any = true;
                }
                Err(e) => {
                    warn!(framework = %framework, error = %e, "skipping framework section");
                }
            }
        }

        // No framework had a template: the concept prose stands alone.
        if !rendered_any {
            sections.push(prose);
        }

        let answer = sections.join("\n\n");
        let truncated = truncate_words(&answer, self.config.max_words);

        debug!(
            frameworks = frameworks.len(),
            matches = filtered.len(),
            words = self.config.max_words,
            "answer assembled"
        );

        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casemap_core::types::{
        Category, ConceptMatch, Confidence, MatchMethod, SourceTag,
    };

    fn m(term: &str, framework: Option<&str>, source: SourceTag, conf: f64) -> ConceptMatch {
        ConceptMatch {
            canonical_term: term.to_string(),
            category: Category::StrategicTheory,
            framework: framework.map(str::to_string),
            surface: term.to_string(),
            confidence: Confidence::new(conf),
            method: MatchMethod::Exact,
            source,
        }
    }

    fn sample_set() -> ConceptSet {
        ConceptSet::from_ordered(vec![
            m("network effects", Some("PlatformStrategy"), SourceTag::Case, 1.0),
            m("transaction costs", Some("TCE"), SourceTag::Question, 0.9),
        ])
    }

    #[test]
    fn substitutes_concept_sentences_into_analysis() {
        let assembler = Assembler::new(AssembleConfig::default());
        let answer = assembler.assemble(
            &sample_set(),
            &["TCE".to_string()],
            &AssembleOptions::default(),
        );
        assert!(answer.contains("Transaction Cost Economics"));
        assert!(answer.contains("network effects (PlatformStrategy)"));
        assert!(!answer.contains(CONCEPT_SENTENCES_PLACEHOLDER));
    }

    #[test]
    fn sections_follow_caller_order() {
        let assembler = Assembler::new(AssembleConfig::default());
        let answer = assembler.assemble(
            &sample_set(),
            &["PlatformStrategy".to_string(), "TCE".to_string()],
            &AssembleOptions::default(),
        );
        let platform = answer.find("Platform theory").unwrap();
        let tce = answer.find("Transaction Cost Economics").unwrap();
        assert!(platform < tce);
    }

    #[test]
    fn empty_set_renders_no_concepts_message() {
        let assembler = Assembler::new(AssembleConfig::default());
        let answer = assembler.assemble(
            &ConceptSet::default(),
            &["TCE".to_string()],
            &AssembleOptions::default(),
        );
        assert!(answer.starts_with("No strategic concepts were detected"));
    }

    #[test]
    fn only_question_filter_drops_case_matches() {
        let assembler = Assembler::new(AssembleConfig::default());
        let options = AssembleOptions {
            only_question: true,
            ..Default::default()
        };
        let answer = assembler.assemble(&sample_set(), &["TCE".to_string()], &options);
        assert!(answer.contains("transaction costs"));
        assert!(!answer.contains("network effects"));
    }

    #[test]
    fn top_n_caps_matches() {
        let assembler = Assembler::new(AssembleConfig::default());
        let options = AssembleOptions {
            top_n: Some(1),
            ..Default::default()
        };
        let answer = assembler.assemble(&sample_set(), &["TCE".to_string()], &options);
        assert!(answer.contains("network effects"));
        assert!(!answer.contains("transaction costs (TCE)"));
    }

    #[test]
    fn truncates_to_word_limit_with_ellipsis() {
        let config = AssembleConfig {
            max_words: 12,
            ..Default::default()
        };
        let assembler = Assembler::new(config);
        let answer = assembler.assemble(
            &sample_set(),
            &["TCE".to_string()],
            &AssembleOptions::default(),
        );
        assert!(answer.ends_with('…'));
        assert_eq!(answer.split_whitespace().count(), 12);
    }

    #[test]
    fn unknown_framework_sections_are_skipped() {
        let assembler = Assembler::new(AssembleConfig::default());
        let answer = assembler.assemble(
            &sample_set(),
            &["Coopetition".to_string(), "TCE".to_string()],
            &AssembleOptions::default(),
        );
        assert!(answer.contains("Transaction Cost Economics"));
    }

    #[test]
    fn no_known_frameworks_still_renders_prose() {
        let assembler = Assembler::new(AssembleConfig::default());
        let answer = assembler.assemble(&sample_set(), &[], &AssembleOptions::default());
        assert!(answer.contains("network effects (PlatformStrategy)"));
    }

    #[test]
    fn style_preamble_leads_the_answer() {
        let assembler = Assembler::new(AssembleConfig::default());
        let options = AssembleOptions {
            style_preamble: Some("concise, exam register".to_string()),
            ..Default::default()
        };
        let answer = assembler.assemble(&sample_set(), &["TCE".to_string()], &options);
        assert!(answer.starts_with("[concise, exam register]"));
    }
}
