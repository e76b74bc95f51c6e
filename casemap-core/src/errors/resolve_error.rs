use super::EmbeddingError;

/// Term-resolution errors.
///
/// The exact and fuzzy tiers never fail on well-formed input; everything
/// here is the semantic tier's doing.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The embedding backend is unavailable and degraded mode was not
    /// requested. Callers may retry, or re-run with degraded mode on.
    #[error("embedding model unavailable: {reason}")]
    ModelUnavailable { reason: String },

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}
