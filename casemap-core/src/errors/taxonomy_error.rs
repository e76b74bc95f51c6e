/// Taxonomy store errors. All of these are fatal at startup: the system
/// cannot produce correct output without a well-formed taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("failed to read taxonomy data from {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("malformed taxonomy data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid taxonomy: {reason}")]
    Validation { reason: String },
}
