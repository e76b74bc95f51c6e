//! Noun-phrase chunking: maximal runs of adjacent content words.
//!
//! Stop words and punctuation delimit chunks, so "the fragmentation of
//! the supplier base" yields "fragmentation" and "supplier base" rather
//! than one determiner-laden span.

use casemap_core::constants::{MAX_PHRASE_TOKENS, STOP_WORDS};

use crate::tokenizer::{adjacent, Token};

/// Extract noun-phrase chunks from a tokenized text.
///
/// A chunk is a maximal run of adjacent non-stop-word tokens, capped at
/// `MAX_PHRASE_TOKENS` tokens and at least `min_chars` characters long.
pub fn noun_phrases(text: &str, tokens: &[Token], min_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut run: Vec<&Token> = Vec::new();

    let mut flush = |run: &mut Vec<&Token>| {
        if run.is_empty() {
            return;
        }
        // All-numeric runs ("400,000", "2019") carry no concept content.
        if run.iter().all(|t| t.lower.chars().all(|c| c.is_ascii_digit())) {
            run.clear();
            return;
        }
        let phrase = run
            .iter()
            .take(MAX_PHRASE_TOKENS)
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        if phrase.len() >= min_chars {
            chunks.push(phrase);
        }
        run.clear();
    };

    for token in tokens {
        let is_stop = STOP_WORDS.contains(&token.lower.as_str());
        let breaks_run = match run.last() {
            Some(prev) => !adjacent(text, prev, token),
            None => false,
        };

        if breaks_run {
            flush(&mut run);
        }
        if is_stop {
            flush(&mut run);
        } else {
            run.push(token);
        }
    }
    flush(&mut run);

    chunks
}
