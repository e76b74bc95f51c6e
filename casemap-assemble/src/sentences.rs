//! Concept prose: one sentence per populated category.

use casemap_core::types::ConceptSet;

/// Render matched concepts as sentences, one per category:
/// "In this case, the strategic theory concepts include: network effects
/// (PlatformStrategy), transaction costs (TCE)."
///
/// Returns an empty string for an empty set — the assembler substitutes
/// its configured no-concepts message instead.
pub fn concept_sentences(concepts: &ConceptSet) -> String {
    let mut sentences = Vec::new();

    for (category, matches) in concepts.by_category() {
        if matches.is_empty() {
            continue;
        }

        let formatted: Vec<String> = matches
            .iter()
            .map(|m| match &m.framework {
                Some(framework) => format!("{} ({framework})", m.canonical_term),
                None => m.canonical_term.clone(),
            })
            .collect();

        sentences.push(format!(
            "In this case, the {} concepts include: {}.",
            category.label(),
            formatted.join(", ")
        ));
    }

    sentences.join(" ")
}
