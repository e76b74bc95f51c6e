//! Named defaults for every configuration value.

/// Minimum fuzzy match score, on the fuzzy tier's native 0–100 scale.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 70.0;

/// Minimum semantic similarity, on the canonical 0–1 scale.
pub const DEFAULT_SEMANTIC_THRESHOLD: f64 = 0.6;

/// Tag unmatched phrases as Unmapped instead of dropping them.
pub const DEFAULT_UNMAPPED_FALLBACK: bool = false;

/// Proceed exact/fuzzy-only when the embedding backend is down.
pub const DEFAULT_ALLOW_DEGRADED: bool = false;

/// Embedding provider: "lexical" (deterministic, in-process) or "remote".
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "lexical";

/// Embedding vector dimensionality.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 256;

/// Max entries in the embedding vector cache.
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 2048;

/// Fail rather than fall back when the configured provider is down.
pub const DEFAULT_STRICT_PROVIDER: bool = false;

/// Shortest candidate phrase the extractor will emit, in characters.
pub const DEFAULT_MIN_PHRASE_CHARS: usize = 2;

/// Maximum words in an assembled answer before truncation.
pub const DEFAULT_MAX_WORDS: usize = 500;

/// Rendered when a request resolves to zero concepts.
pub const DEFAULT_NO_CONCEPTS_MESSAGE: &str =
    "No strategic concepts were detected. Broaden the question or lower the matching thresholds.";
