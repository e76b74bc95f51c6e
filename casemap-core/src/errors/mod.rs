pub mod assemble_error;
pub mod config_error;
pub mod embedding_error;
pub mod extract_error;
pub mod resolve_error;
pub mod taxonomy_error;

pub use assemble_error::AssembleError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use extract_error::ExtractError;
pub use resolve_error::ResolveError;
pub use taxonomy_error::TaxonomyError;

/// Umbrella error for the whole system.
#[derive(Debug, thiserror::Error)]
pub enum CasemapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Assemble(#[from] AssembleError),
}

/// Result alias used across the workspace.
pub type CasemapResult<T> = Result<T, CasemapError>;
