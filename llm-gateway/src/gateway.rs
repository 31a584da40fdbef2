//! Single-profile gateway facade over the provider services.
//!
//! Construct once, wrap in `Arc`, and pass clones to dependents. The
//! gateway holds exactly one deterministic generation profile; callers that
//! need embeddings build a second gateway from the embedding config.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use llm_gateway::config::default_config;
//! use llm_gateway::gateway::LlmGateway;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gw = Arc::new(LlmGateway::new(default_config::config_from_env()?)?);
//!     let txt = gw.generate("Say hello.").await?;
//!     println!("{txt}");
//!     Ok(())
//! }
//! ```

use std::{future::Future, pin::Pin};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::Result,
    health_service::{HealthService, HealthStatus},
    services::{ollama_service::OllamaService, open_ai_service::OpenAiService},
};

/// Minimal text-generation capability.
///
/// This is the seam between the core assistant logic and any concrete
/// backend: `assistant-core` only ever sees this trait, so tests can plug
/// in a deterministic stub instead of a live model.
pub trait TextGeneration: Send + Sync {
    /// Sends one fully-rendered prompt and returns the raw completion.
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

/// One provider-backed gateway instance.
enum Backend {
    Ollama(OllamaService),
    OpenAi(OpenAiService),
}

/// Stateless gateway bound to a single model config.
///
/// No retries, no streaming, no caching: one blocking request-response per
/// call, errors propagated unmodified.
pub struct LlmGateway {
    backend: Backend,
    health: HealthService,
    cfg: LlmModelConfig,
}

impl LlmGateway {
    /// Builds the gateway for the provider named in the config.
    ///
    /// # Errors
    /// Propagates provider construction errors (invalid provider, endpoint,
    /// or missing API key).
    pub fn new(cfg: LlmModelConfig) -> Result<Self> {
        let backend = match cfg.provider {
            LlmProvider::Ollama => Backend::Ollama(OllamaService::new(cfg.clone())?),
            LlmProvider::OpenAi => Backend::OpenAi(OpenAiService::new(cfg.clone())?),
        };
        let health = HealthService::new(cfg.timeout_secs)?;
        Ok(Self {
            backend,
            health,
            cfg,
        })
    }

    /// Sends one prompt to the configured provider and returns the raw
    /// completion text.
    ///
    /// # Errors
    /// Propagates transport, HTTP status, and decode errors unmodified.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        match &self.backend {
            Backend::Ollama(svc) => svc.generate(prompt).await,
            Backend::OpenAi(svc) => svc.generate(prompt).await,
        }
    }

    /// Retrieves one embeddings vector for the input text.
    ///
    /// # Errors
    /// Propagates transport, HTTP status, and decode errors unmodified.
    pub async fn embeddings(&self, input: &str) -> Result<Vec<f32>> {
        match &self.backend {
            Backend::Ollama(svc) => svc.embeddings(input).await,
            Backend::OpenAi(svc) => svc.embeddings(input).await,
        }
    }

    /// Runs a best-effort health probe against the configured provider.
    ///
    /// Never fails: connectivity problems are reported as `ok=false`.
    pub async fn health(&self) -> HealthStatus {
        match &self.backend {
            Backend::Ollama(svc) => {
                self.health
                    .check_ollama(svc.endpoint(), Some(svc.model()))
                    .await
            }
            Backend::OpenAi(svc) => {
                self.health
                    .check_openai(svc.endpoint(), self.cfg.api_key.as_deref(), Some(svc.model()))
                    .await
            }
        }
    }
}

impl TextGeneration for LlmGateway {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(LlmGateway::generate(self, prompt))
    }
}
