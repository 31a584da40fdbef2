//! Unified error types for the crate.

use thiserror::Error;

/// Top-level error for semantic-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Invalid or unsupported configuration.
    #[error("config error: {0}")]
    Config(String),

    /// JSON parsing / serialization errors.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Embedding provider failures (wrapped gateway errors).
    #[error("embedding error: {0}")]
    Embedding(#[from] llm_gateway::GatewayError),

    /// Mismatch in vector dimensionality.
    #[error("vector size mismatch: got {got}, want {want}")]
    VectorSizeMismatch { got: usize, want: usize },

    /// Qdrant client errors (wrapped).
    #[error("qdrant error: {0}")]
    Qdrant(String),

    /// Generic error from anyhow chain.
    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}
