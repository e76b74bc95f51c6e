//! Word-level tokenizer with the positional facts the recognizers need:
//! byte spans (for adjacency checks), capitalization, sentence starts.

use regex::Regex;

/// A single word token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token as it appeared in the input.
    pub text: String,
    /// Lower-cased form.
    pub lower: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// First character is uppercase.
    pub capitalized: bool,
    /// Token opens the text or follows sentence-ending punctuation.
    pub sentence_start: bool,
}

/// Regex-backed word scanner.
pub struct Tokenizer {
    word: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        // Words start alphanumeric and may continue with internal hyphens
        // or apostrophes ("make-or-buy", "k-crete", "firm's").
        let word = Regex::new(r"[A-Za-z0-9][A-Za-z0-9'\-]*").expect("static regex");
        Self { word }
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut prev_end = 0usize;

        for m in self.word.find_iter(text) {
            let gap = &text[prev_end..m.start()];
            let sentence_start =
                tokens.is_empty() || gap.contains(['.', '!', '?', ';', '\n']);

            let token_text = m.as_str().to_string();
            let capitalized = token_text
                .chars()
                .next()
                .map(char::is_uppercase)
                .unwrap_or(false);

            tokens.push(Token {
                lower: token_text.to_lowercase(),
                text: token_text,
                start: m.start(),
                end: m.end(),
                capitalized,
                sentence_start,
            });
            prev_end = m.end();
        }

        tokens
    }
}

/// Whether two consecutive tokens are separated by whitespace only.
/// N-gram recognizers refuse to span commas, periods, or parentheses.
pub fn adjacent(text: &str, left: &Token, right: &Token) -> bool {
    text[left.end..right.start]
        .chars()
        .all(char::is_whitespace)
}
