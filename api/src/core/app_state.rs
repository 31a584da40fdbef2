use std::sync::Arc;

use assistant_core::{ConversationState, Orchestrator};
use llm_gateway::{LlmGateway, config::default_config, error_handler::env_opt_u32};
use semantic_store::{GatewayEmbedder, SemanticStore, StoreConfig};

use crate::error_handler::{AppError, AppResult};

/// Shared state for all HTTP handlers.
///
/// One generation gateway, one embedding gateway, and two stores over the
/// same Qdrant endpoint: the product catalog and the grounding docs.
pub struct AppState {
    /// Deterministic text-generation gateway.
    pub gateway: Arc<LlmGateway>,
    /// Product catalog similarity search.
    pub catalog: Arc<SemanticStore>,
    /// Docs (brand philosophy, reviews, support tickets) similarity search.
    pub docs: Arc<SemanticStore>,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// # Env
    /// - gateway vars (`LLM_KIND`, `OLLAMA_*`/`OPENAI_*`, `EMBEDDING_MODEL`)
    /// - `QDRANT_URL` (default `http://localhost:6334`)
    /// - `CATALOG_COLLECTION` (default `catalogs`)
    /// - `DOCS_COLLECTION` (default `docs`)
    /// - `EMBEDDING_DIM` (default 1536)
    pub fn from_env() -> AppResult<Self> {
        let gen_cfg =
            default_config::config_from_env().map_err(|e| AppError::Config(e.to_string()))?;
        let gateway =
            Arc::new(LlmGateway::new(gen_cfg).map_err(|e| AppError::Config(e.to_string()))?);

        let embed_cfg =
            default_config::config_embedding().map_err(|e| AppError::Config(e.to_string()))?;
        let embed_gateway =
            Arc::new(LlmGateway::new(embed_cfg).map_err(|e| AppError::Config(e.to_string()))?);
        let dim = env_opt_u32("EMBEDDING_DIM")
            .map_err(|e| AppError::Config(e.to_string()))?
            .unwrap_or(1536) as usize;

        let qdrant_url = std::env::var("QDRANT_URL")
            .unwrap_or_else(|_| "http://localhost:6334".into());
        let catalog_collection =
            std::env::var("CATALOG_COLLECTION").unwrap_or_else(|_| "catalogs".into());
        let docs_collection = std::env::var("DOCS_COLLECTION").unwrap_or_else(|_| "docs".into());

        let catalog = Arc::new(
            SemanticStore::new(
                StoreConfig::new_default(qdrant_url.as_str(), catalog_collection),
                Box::new(GatewayEmbedder::new(embed_gateway.clone(), dim)),
            )
            .map_err(|e| AppError::Config(e.to_string()))?,
        );
        let docs = Arc::new(
            SemanticStore::new(
                StoreConfig::new_default(qdrant_url.as_str(), docs_collection),
                Box::new(GatewayEmbedder::new(embed_gateway, dim)),
            )
            .map_err(|e| AppError::Config(e.to_string()))?,
        );

        Ok(Self {
            gateway,
            catalog,
            docs,
        })
    }

    /// Builds an orchestrator borrowing this state's collaborators.
    pub fn orchestrator(&self) -> Orchestrator<'_> {
        Orchestrator::new(
            self.gateway.as_ref(),
            self.catalog.as_ref(),
            self.docs.as_ref(),
        )
    }

    /// Fresh conversation value for new sessions.
    pub fn fresh_conversation(&self) -> ConversationState {
        ConversationState::new()
    }
}
