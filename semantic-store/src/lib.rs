//! Top-k semantic retrieval over Qdrant.
//!
//! This crate provides the search side of the assistant's vector storage:
//! given a query string, embed it through an [`EmbeddingsProvider`] and
//! return the k nearest records from a named collection, each carrying its
//! score, primary text, and full JSON payload metadata.
//!
//! Two logical collections exist in this system — the product catalog and
//! the grounding docs — served by two `SemanticStore` instances over the
//! same Qdrant endpoint. Ingestion is out of scope: collections are
//! populated by external tooling.

mod config;
mod embed;
mod errors;
mod qdrant_facade;
mod record;
mod retrieve;

pub use config::{DistanceKind, StoreConfig};
pub use embed::{EmbeddingsProvider, gateway_embedder::GatewayEmbedder};
pub use errors::StoreError;
pub use record::SearchHit;

use std::{future::Future, pin::Pin};

use tracing::trace;

/// Text-to-top-k similarity search capability.
///
/// The core consumes this trait rather than a concrete store so that tests
/// can substitute canned candidate sets.
pub trait SemanticSearch: Send + Sync {
    /// Returns the `top_k` nearest records to `query`, best match first.
    fn search<'a>(
        &'a self,
        query: &'a str,
        top_k: u64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SearchHit>, StoreError>> + Send + 'a>>;
}

/// High-level facade that wires configuration, embeddings, and the Qdrant
/// client.
///
/// This is the single entry point recommended for application code.
pub struct SemanticStore {
    cfg: StoreConfig,
    client: qdrant_facade::QdrantFacade,
    embedder: Box<dyn EmbeddingsProvider>,
}

impl SemanticStore {
    /// Constructs a new store from the given configuration and embedder.
    ///
    /// # Errors
    /// Returns `StoreError::Config` if the client initialization fails.
    pub fn new(cfg: StoreConfig, embedder: Box<dyn EmbeddingsProvider>) -> Result<Self, StoreError> {
        trace!("SemanticStore::new collection={}", cfg.collection);
        let client = qdrant_facade::QdrantFacade::new(&cfg)?;
        Ok(Self {
            cfg,
            client,
            embedder,
        })
    }

    /// Embeds the query text and returns the `top_k` nearest hits.
    ///
    /// # Errors
    /// Returns embedding errors or Qdrant failures.
    pub async fn search_text(&self, query: &str, top_k: u64) -> Result<Vec<SearchHit>, StoreError> {
        trace!("SemanticStore::search_text top_k={top_k}");
        retrieve::search_text(&self.cfg, &self.client, self.embedder.as_ref(), query, top_k).await
    }
}

impl SemanticSearch for SemanticStore {
    fn search<'a>(
        &'a self,
        query: &'a str,
        top_k: u64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SearchHit>, StoreError>> + Send + 'a>> {
        Box::pin(self.search_text(query, top_k))
    }
}
