//! Typed error for the assistant core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors from the LLM gateway (transport, provider, decode).
    #[error("gateway error: {0}")]
    Gateway(#[from] llm_gateway::GatewayError),

    /// Errors from the semantic store (embedding, Qdrant).
    #[error("store error: {0}")]
    Store(#[from] semantic_store::StoreError),

    /// A catalog record came back without a required attribute.
    ///
    /// This is an upstream data-quality defect; the whole request fails
    /// rather than silently dropping the record from the ranking.
    #[error("catalog record is missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A conversation transition was attempted on a state that lacks the
    /// fields the transition requires.
    #[error("invalid conversation state: {0}")]
    InvalidState(&'static str),
}
