//! Retrieval helpers: embed the query and normalize hits.

use crate::config::StoreConfig;
use crate::embed::EmbeddingsProvider;
use crate::errors::StoreError;
use crate::qdrant_facade::QdrantFacade;
use crate::record::SearchHit;

use tracing::trace;

/// Embeds the query text and returns normalized hits, best match first.
///
/// # Errors
/// Returns embedding/provider errors or Qdrant failures.
pub async fn search_text(
    cfg: &StoreConfig,
    client: &QdrantFacade,
    provider: &dyn EmbeddingsProvider,
    query: &str,
    top_k: u64,
) -> Result<Vec<SearchHit>, StoreError> {
    trace!("retrieve::search_text top_k={top_k}");

    let qv = provider.embed(query).await?;
    let hits = client.search(qv, top_k, cfg.exact_search).await?;

    let mut out = Vec::with_capacity(hits.len());
    for (score, payload) in hits {
        let text = payload
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let source = payload
            .get("source")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        out.push(SearchHit {
            score,
            text,
            source,
            payload,
        });
    }

    trace!("retrieve::search_text hits={}", out.len());
    Ok(out)
}
