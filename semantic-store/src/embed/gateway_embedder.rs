//! Embedding provider backed by the shared LLM gateway.
//!
//! Delegates to [`LlmGateway::embeddings`] and enforces the expected
//! embedding dimension before handing vectors to Qdrant.

use std::sync::Arc;

use crate::{EmbeddingsProvider, StoreError};
use llm_gateway::LlmGateway;

/// Gateway-backed embedding provider (async).
#[derive(Clone)]
pub struct GatewayEmbedder {
    gateway: Arc<LlmGateway>,
    dim: usize,
}

impl GatewayEmbedder {
    /// Construct a new embedder bound to an embedding-model gateway.
    ///
    /// `dim` is the expected embedding dimension; vectors of any other size
    /// are rejected before reaching the vector store.
    pub fn new(gateway: Arc<LlmGateway>, dim: usize) -> Self {
        Self { gateway, dim }
    }
}

impl EmbeddingsProvider for GatewayEmbedder {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<f32>, StoreError>> + Send + 'a>,
    > {
        Box::pin(async move {
            let vec = self.gateway.embeddings(text).await?;

            if vec.len() != self.dim {
                return Err(StoreError::VectorSizeMismatch {
                    got: vec.len(),
                    want: self.dim,
                });
            }

            Ok(vec)
        })
    }
}
