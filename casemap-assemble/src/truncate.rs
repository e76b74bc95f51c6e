//! Word-limit truncation.

/// Truncate to `max_words` whitespace-delimited words, appending an
/// ellipsis to the last kept word when anything was dropped.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }
    if max_words == 0 {
        return "…".to_string();
    }
    format!("{}…", words[..max_words].join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        let text = "network effects drive adoption";
        assert_eq!(truncate_words(text, 10), text);
    }

    #[test]
    fn exact_limit_is_untouched() {
        let text = "one two three";
        assert_eq!(truncate_words(text, 3), text);
    }

    #[test]
    fn over_limit_drops_trailing_words_and_marks_ellipsis() {
        let truncated = truncate_words("one two three four five", 3);
        assert_eq!(truncated, "one two three…");
    }

    #[test]
    fn zero_limit_is_just_the_marker() {
        assert_eq!(truncate_words("anything at all", 0), "…");
    }

    #[test]
    fn truncation_rejoins_kept_words_with_single_spaces() {
        let truncated = truncate_words("alpha beta\n\ngamma delta", 3);
        assert_eq!(truncated, "alpha beta gamma…");
    }
}
