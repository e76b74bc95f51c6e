//! Per-framework template bundles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use casemap_core::errors::AssembleError;

/// Placeholder in an analysis section that receives the concept prose.
pub const CONCEPT_SENTENCES_PLACEHOLDER: &str = "{{CONCEPT_SENTENCES}}";

/// Intro/analysis/conclusion strings for one framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateBundle {
    pub intro: String,
    pub analysis: String,
    pub conclusion: String,
}

impl TemplateBundle {
    pub fn new(
        intro: impl Into<String>,
        analysis: impl Into<String>,
        conclusion: impl Into<String>,
    ) -> Self {
        Self {
            intro: intro.into(),
            analysis: analysis.into(),
            conclusion: conclusion.into(),
        }
    }
}

/// Framework → bundle map with built-in defaults.
///
/// Callers may override or add bundles; a framework without any bundle is
/// skipped at assembly time rather than failing the answer.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    bundles: BTreeMap<String, TemplateBundle>,
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateLibrary {
    /// The built-in bundles: TCE, RBV, PlatformStrategy.
    pub fn builtin() -> Self {
        let mut bundles = BTreeMap::new();

        bundles.insert(
            "TCE".to_string(),
            TemplateBundle::new(
                "Transaction Cost Economics (TCE) examines how firms choose to organize \
                 their economic activities and minimize the frictions of market exchange.",
                "{{CONCEPT_SENTENCES}}\n\nThese factors influence the firm's make-or-buy \
                 decisions and governance structures.",
                "TCE provides insight into the optimal boundaries of the firm and its \
                 relationships with other market participants.",
            ),
        );

        bundles.insert(
            "RBV".to_string(),
            TemplateBundle::new(
                "The Resource-Based View (RBV) of the firm focuses on internal resources \
                 and capabilities as the primary source of competitive advantage.",
                "{{CONCEPT_SENTENCES}}\n\nThese resources and capabilities contribute to \
                 the firm's competitive position.",
                "The RBV framework helps explain how the firm's unique resource bundle \
                 creates sustainable competitive advantage.",
            ),
        );

        bundles.insert(
            "PlatformStrategy".to_string(),
            TemplateBundle::new(
                "Platform theory examines how firms create and capture value through \
                 platforms and ecosystems.",
                "{{CONCEPT_SENTENCES}}\n\nThese platform dynamics shape the firm's \
                 competitive strategy and market position.",
                "Platform strategy helps explain how firms leverage network effects and \
                 ecosystem complementarities.",
            ),
        );

        Self { bundles }
    }

    /// An empty library (custom bundles only).
    pub fn empty() -> Self {
        Self {
            bundles: BTreeMap::new(),
        }
    }

    /// Add or replace a framework's bundle.
    pub fn with_bundle(mut self, framework: impl Into<String>, bundle: TemplateBundle) -> Self {
        let framework = framework.into();
        if self.bundles.insert(framework.clone(), bundle).is_some() {
            warn!(framework = %framework, "template bundle replaced");
        }
        self
    }

    pub fn get(&self, framework: &str) -> Result<&TemplateBundle, AssembleError> {
        self.bundles
            .get(framework)
            .ok_or_else(|| AssembleError::UnknownFramework {
                framework: framework.to_string(),
            })
    }

    pub fn contains(&self, framework: &str) -> bool {
        self.bundles.contains_key(framework)
    }

    pub fn frameworks(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }
}
