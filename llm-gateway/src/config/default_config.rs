//! Default LLM configs loaded strictly from environment variables.
//!
//! This module provides convenience constructors for [`LlmModelConfig`],
//! grouped by provider and role:
//!
//! - **Generation** → the single deterministic text-generation profile
//! - **Embedding**  → embedding generator for semantic search
//!
//! Generation configs always pin `temperature = 0.0` so that repeated
//! identical prompts produce identical completions.
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_KIND` = provider kind (`ollama` or `openai`)
//! - `LLM_MAX_TOKENS` = optional max tokens (u32)
//!
//! Ollama-specific:
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (mandatory)
//! - `OLLAMA_MODEL`                = generation model (mandatory)
//!
//! OpenAI-specific:
//! - `OPENAI_API_KEY` = API key (mandatory)
//! - `OPENAI_MODEL`   = generation model (mandatory)
//! - `OPENAI_URL`     = endpoint base (optional, defaults to api.openai.com)
//!
//! Shared:
//! - `EMBEDDING_MODEL` = embedding model (mandatory for embedding configs)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{ConfigError, GatewayError, env_opt_u32, must_env},
};

/// Resolves the Ollama endpoint strictly from environment.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if both are missing
/// - [`ConfigError::InvalidNumber`] if `OLLAMA_PORT` is invalid
fn ollama_endpoint() -> Result<String, GatewayError> {
    if let Ok(url) = std::env::var("OLLAMA_URL") {
        if !url.trim().is_empty() {
            return Ok(url);
        }
    }
    if let Ok(port) = std::env::var("OLLAMA_PORT") {
        if !port.trim().is_empty() {
            let _ = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "OLLAMA_PORT",
                    reason: "expected u16 (1..=65535)",
                })?;
            return Ok(format!("http://localhost:{port}"));
        }
    }
    Err(GatewayError::Config(ConfigError::MissingVar(
        "OLLAMA_URL or OLLAMA_PORT",
    )))
}

/// Resolves the OpenAI endpoint from environment, with the public API as
/// the default.
fn openai_endpoint() -> String {
    match std::env::var("OPENAI_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => "https://api.openai.com".to_string(),
    }
}

/// Constructs the deterministic **generation** config for Ollama.
///
/// # Env
/// - `OLLAMA_URL` or `OLLAMA_PORT` (required)
/// - `OLLAMA_MODEL` (required)
/// - `LLM_MAX_TOKENS` (optional)
pub fn config_ollama_generation() -> Result<LlmModelConfig, GatewayError> {
    let endpoint = ollama_endpoint()?;
    let model = must_env("OLLAMA_MODEL")?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Ollama,
        model,
        endpoint,
        api_key: None,
        max_tokens,
        temperature: Some(0.0),
        top_p: None,
        timeout_secs: Some(60),
    })
}

/// Constructs the deterministic **generation** config for OpenAI.
///
/// # Env
/// - `OPENAI_API_KEY` (required)
/// - `OPENAI_MODEL` (required)
/// - `OPENAI_URL` (optional)
/// - `LLM_MAX_TOKENS` (optional)
pub fn config_openai_generation() -> Result<LlmModelConfig, GatewayError> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let model = must_env("OPENAI_MODEL")?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    Ok(LlmModelConfig {
        provider: LlmProvider::OpenAi,
        model,
        endpoint: openai_endpoint(),
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(0.0),
        top_p: None,
        timeout_secs: Some(60),
    })
}

/// Constructs the **embedding** config for the provider selected by
/// `LLM_KIND`.
///
/// # Env
/// - `LLM_KIND` (required: `ollama` or `openai`)
/// - `EMBEDDING_MODEL` (required)
/// - provider endpoint/key vars as in the generation configs
pub fn config_embedding() -> Result<LlmModelConfig, GatewayError> {
    let model = must_env("EMBEDDING_MODEL")?;
    let base = config_from_env()?;

    Ok(LlmModelConfig { model, ..base })
}

/// Constructs the generation config for the provider selected by `LLM_KIND`.
///
/// # Errors
/// - [`ConfigError::UnsupportedProvider`] for an unknown `LLM_KIND`
/// - provider-specific errors from the underlying constructors
pub fn config_from_env() -> Result<LlmModelConfig, GatewayError> {
    let kind = must_env("LLM_KIND")?;
    match kind.trim().to_ascii_lowercase().as_str() {
        "ollama" => config_ollama_generation(),
        "openai" | "chatgpt" => config_openai_generation(),
        other => Err(ConfigError::UnsupportedProvider(other.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_is_rejected() {
        // SAFETY: tests run single-threaded over this variable.
        unsafe { std::env::set_var("LLM_KIND", "parrot") };
        let err = config_from_env().unwrap_err();
        assert!(err.to_string().contains("unsupported provider"));
    }
}
