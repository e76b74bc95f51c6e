/// Curated set of strategy-relevant verb lemmas the extractor recognizes.
pub const BUSINESS_VERBS: &[&str] = &[
    "acquire",
    "compete",
    "differentiate",
    "diversify",
    "enter",
    "exit",
    "expand",
    "innovate",
    "integrate",
    "merge",
    "outsource",
    "partner",
    "position",
    "scale",
    "segment",
    "specialize",
    "standardize",
];

/// English stop-words excluded from noun-phrase heads and noise checks.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "because", "been", "but", "by", "can", "could",
    "did", "do", "does", "for", "from", "had", "has", "have", "he", "her", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "may", "might", "more", "most", "must", "no", "not", "of",
    "on", "or", "our", "shall", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "to", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "will", "with", "would", "you", "your",
];

/// Upper bound on tokens in a single noun phrase.
pub const MAX_PHRASE_TOKENS: usize = 6;
