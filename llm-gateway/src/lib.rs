//! Stateless LLM gateway shared by the assistant backend.
//!
//! The gateway sends one fully-rendered prompt to a text-generation backend
//! and returns the raw completion. Supported providers:
//! - **Ollama** — `POST {endpoint}/api/generate` (non-streaming)
//! - **OpenAI** — `POST {endpoint}/v1/chat/completions` (non-streaming)
//!
//! There are no retries, no streaming and no caching: a transport or
//! provider error propagates unmodified to the caller. Default configs pin
//! `temperature = 0.0` so repeated identical prompts stay reproducible.

pub mod config;
pub mod error_handler;
pub mod gateway;
pub mod health_service;
pub mod services;

pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::{ConfigError, GatewayError, Result};
pub use gateway::{LlmGateway, TextGeneration};
pub use health_service::HealthStatus;
