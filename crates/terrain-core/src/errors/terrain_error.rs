use super::CatalogError;

/// Top-level error type for the terrain workspace.
///
/// Scoring and drift detection never fail; these errors cover loading
/// reference data, parsing configuration, and strict identifier parsing.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("unknown primary type: {id}")]
    UnknownPrimaryType { id: String },

    #[error("unknown modifier: {id}")]
    UnknownModifier { id: String },

    #[error("unknown quiz flag: {id}")]
    UnknownQuizFlag { id: String },

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("tracing init failed: {reason}")]
    TracingInit { reason: String },
}

/// Convenience alias used across the workspace.
pub type TerrainResult<T> = Result<T, TerrainError>;
