//! Business-verb detection: a rule-based suffix stripper mapped against
//! the curated strategy-verb set.

use std::collections::HashSet;

/// Matches inflected tokens against a set of verb lemmas.
pub struct VerbMatcher {
    lemmas: HashSet<String>,
}

impl VerbMatcher {
    pub fn new(verbs: &[String]) -> Self {
        Self {
            lemmas: verbs.iter().map(|v| v.to_lowercase()).collect(),
        }
    }

    /// Return the matched lemma for a lower-cased token, if any.
    pub fn match_token(&self, lower: &str) -> Option<&str> {
        for candidate in lemma_candidates(lower) {
            if let Some(lemma) = self.lemmas.get(&candidate) {
                return Some(lemma.as_str());
            }
        }
        None
    }
}

/// Possible lemmas for an inflected English verb form, most specific
/// first. Covers -s/-es/-ed/-d/-ing plus the silent-e and doubled-final-
/// consonant patterns ("merging" → "merge", "planned" → "plan").
fn lemma_candidates(word: &str) -> Vec<String> {
    let mut candidates = vec![word.to_string()];

    let mut push_stem = |stem: &str| {
        if stem.len() >= 3 {
            candidates.push(stem.to_string());
            candidates.push(format!("{stem}e"));
            let chars: Vec<char> = stem.chars().collect();
            if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
                candidates.push(chars[..chars.len() - 1].iter().collect());
            }
        }
    };

    if let Some(stem) = word.strip_suffix("ing") {
        push_stem(stem);
    }
    if let Some(stem) = word.strip_suffix("ed") {
        push_stem(stem);
    }
    if let Some(stem) = word.strip_suffix("es") {
        push_stem(stem);
    }
    if let Some(stem) = word.strip_suffix('s') {
        push_stem(stem);
    }
    if let Some(stem) = word.strip_suffix('d') {
        push_stem(stem);
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> VerbMatcher {
        VerbMatcher::new(&[
            "acquire".to_string(),
            "compete".to_string(),
            "expand".to_string(),
            "merge".to_string(),
            "outsource".to_string(),
            "scale".to_string(),
        ])
    }

    #[test]
    fn matches_base_form() {
        assert_eq!(matcher().match_token("compete"), Some("compete"));
    }

    #[test]
    fn matches_third_person() {
        assert_eq!(matcher().match_token("expands"), Some("expand"));
        assert_eq!(matcher().match_token("merges"), Some("merge"));
    }

    #[test]
    fn matches_past_tense() {
        assert_eq!(matcher().match_token("competed"), Some("compete"));
        assert_eq!(matcher().match_token("acquired"), Some("acquire"));
        assert_eq!(matcher().match_token("outsourced"), Some("outsource"));
    }

    #[test]
    fn matches_progressive() {
        assert_eq!(matcher().match_token("expanding"), Some("expand"));
        assert_eq!(matcher().match_token("merging"), Some("merge"));
        assert_eq!(matcher().match_token("scaling"), Some("scale"));
    }

    #[test]
    fn non_verbs_miss() {
        assert_eq!(matcher().match_token("factory"), None);
        assert_eq!(matcher().match_token("costs"), None);
    }
}
