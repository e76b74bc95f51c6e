use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a component proceeding on a fallback path.
///
/// Emitted when the resolver skips the semantic tier in opt-in degraded
/// mode, or when the embedding engine falls past its primary provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradationEvent {
    /// Component that degraded ("embeddings", "resolver").
    pub component: String,
    /// What failed.
    pub failure: String,
    /// What was used instead.
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
