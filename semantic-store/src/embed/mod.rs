use crate::errors::StoreError;
use std::{future::Future, pin::Pin};

/// Provider interface for embedding generation.
///
/// Async is required because real providers (Ollama, OpenAI) perform HTTP
/// requests. Implement this trait to plug in your own embedding backend.
pub trait EmbeddingsProvider: Send + Sync {
    /// Async embedding function.
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, StoreError>> + Send + 'a>>;
}

pub mod gateway_embedder;
