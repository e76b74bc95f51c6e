use crate::types::SourceTag;

/// Extraction errors, scoped to a single input text.
///
/// A failure on one input never aborts the other inputs of a multi-input
/// request; the pipeline collects these per source.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("input '{input}' could not be processed: {reason}")]
    InputFailed { input: SourceTag, reason: String },
}

impl ExtractError {
    /// Which input this error belongs to.
    pub fn source_tag(&self) -> SourceTag {
        match self {
            ExtractError::InputFailed { input, .. } => *input,
        }
    }
}
