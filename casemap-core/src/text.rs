//! Text normalization shared by the taxonomy index and the extractor.

use crate::constants::STOP_WORDS;

/// Normalize raw text for matching: lower-case, collapse whitespace runs
/// to a single space, trim. Punctuation is preserved.
///
/// Pure and idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Whether a normalized phrase carries no matchable content: empty, or
/// nothing but stop-words and punctuation. Noise phrases never reach the
/// fuzzy or semantic tier.
pub fn is_noise(normalized: &str) -> bool {
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .all(|t| STOP_WORDS.contains(&t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("  Network\t\tEffects \n"), "network effects");
    }

    #[test]
    fn preserves_punctuation() {
        assert_eq!(normalize("make-or-buy decision!"), "make-or-buy decision!");
    }

    #[test]
    fn idempotent() {
        let once = normalize("  Asset   SPECIFICITY  ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn empty_is_noise() {
        assert!(is_noise(""));
        assert!(is_noise("   "));
    }

    #[test]
    fn stop_words_and_punctuation_are_noise() {
        assert!(is_noise("the of and"));
        assert!(is_noise("?!—,"));
        assert!(is_noise("to be or not to be"));
    }

    #[test]
    fn content_words_are_not_noise() {
        assert!(!is_noise("network effects"));
        assert!(!is_noise("the supplier"));
    }
}
