//! Named-entity recognition against the IndustryContext gazetteer, with a
//! capitalized-run heuristic for organizations the table does not list.

use std::collections::{HashMap, HashSet};

use casemap_core::text::normalize;
use casemap_core::types::EntityKind;
use casemap_taxonomy::GazetteerTerm;

use crate::tokenizer::{adjacent, Token};

/// A recognized entity span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Surface text as it appeared in the input.
    pub text: String,
    pub kind: EntityKind,
}

/// Gazetteer-driven recognizer restricted to an entity-kind allow-list.
pub struct EntityRecognizer {
    /// normalized phrase → kind.
    gazetteer: HashMap<String, EntityKind>,
    allow: HashSet<EntityKind>,
    /// Longest gazetteer phrase, in tokens.
    max_ngram: usize,
}

impl EntityRecognizer {
    pub fn new(gazetteer: Vec<GazetteerTerm>, allow: &[EntityKind]) -> Self {
        let max_ngram = gazetteer
            .iter()
            .map(|g| g.phrase.split(' ').count())
            .max()
            .unwrap_or(1);
        Self {
            gazetteer: gazetteer.into_iter().map(|g| (g.phrase, g.kind)).collect(),
            allow: allow.iter().copied().collect(),
            max_ngram,
        }
    }

    /// Recognize entities in a tokenized text.
    ///
    /// Longest gazetteer n-gram wins at each position; tokens consumed by
    /// a gazetteer hit are excluded from the capitalized-run heuristic.
    pub fn recognize(&self, text: &str, tokens: &[Token]) -> Vec<Entity> {
        let mut entities = Vec::new();
        let mut consumed = vec![false; tokens.len()];

        // Pass 1: gazetteer n-grams, longest first at each position.
        let mut i = 0;
        while i < tokens.len() {
            let mut matched = 0;
            for n in (1..=self.max_ngram.min(tokens.len() - i)).rev() {
                if !span_adjacent(text, &tokens[i..i + n]) {
                    continue;
                }
                let surface = join_tokens(&tokens[i..i + n]);
                if let Some(&kind) = self.gazetteer.get(&normalize(&surface)) {
                    if self.allow.contains(&kind) {
                        entities.push(Entity {
                            text: surface,
                            kind,
                        });
                        for flag in consumed.iter_mut().skip(i).take(n) {
                            *flag = true;
                        }
                        matched = n;
                    }
                    break;
                }
            }
            i += matched.max(1);
        }

        // Pass 2: capitalized runs outside sentence starts, read as
        // organization names ("Fields Construction", "Katerra").
        if self.allow.contains(&EntityKind::Organization) {
            let mut i = 0;
            while i < tokens.len() {
                if consumed[i] || !tokens[i].capitalized {
                    i += 1;
                    continue;
                }
                let mut j = i + 1;
                while j < tokens.len()
                    && !consumed[j]
                    && tokens[j].capitalized
                    && adjacent(text, &tokens[j - 1], &tokens[j])
                {
                    j += 1;
                }
                // A lone capitalized word at a sentence start is ordinary
                // prose, not a name.
                let run_len = j - i;
                if run_len >= 2 || !tokens[i].sentence_start {
                    entities.push(Entity {
                        text: join_tokens(&tokens[i..j]),
                        kind: EntityKind::Organization,
                    });
                }
                i = j;
            }
        }

        entities
    }
}

fn span_adjacent(text: &str, span: &[Token]) -> bool {
    span.windows(2).all(|w| adjacent(text, &w[0], &w[1]))
}

fn join_tokens(span: &[Token]) -> String {
    span.iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
