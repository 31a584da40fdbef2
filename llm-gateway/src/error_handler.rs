//! Unified error handling for `llm-gateway`.
//!
//! This module exposes a single top-level error type [`GatewayError`] for
//! the whole crate and groups configuration errors in [`ConfigError`].
//! Small helpers for reading/validating environment variables are provided
//! and return the unified [`Result<T>`] alias.
//!
//! All messages include the suffix `[LLM Gateway]` to simplify attribution
//! in logs.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Top-level error for the `llm-gateway` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration/validation errors (startup/readiness).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The provider in the config does not match the service being built.
    #[error("[LLM Gateway] invalid provider: expected {expected}")]
    InvalidProvider {
        /// Provider the service requires (e.g., `"Ollama"`).
        expected: &'static str,
    },

    /// The API key is required by the provider but missing from the config.
    #[error("[LLM Gateway] missing API key for provider {0}")]
    MissingApiKey(&'static str),

    /// Invalid endpoint (empty or missing http/https scheme).
    #[error("[LLM Gateway] invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Underlying HTTP transport error.
    #[error("[LLM Gateway] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// Non-successful HTTP status from upstream.
    #[error("[LLM Gateway] unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body.
        snippet: String,
    },

    /// Unexpected/invalid JSON response.
    #[error("[LLM Gateway] failed to decode response: {0}")]
    Decode(String),
}

/// Error enum for environment/config-driven setup.
///
/// Keep this focused: only errors that realistically happen at config
/// load/validation time.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[LLM Gateway] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (like ports, limits, timeouts).
    #[error("[LLM Gateway] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `LLM_MAX_TOKENS`, `OLLAMA_PORT`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u32`).
        reason: &'static str,
    },

    /// Unsupported provider in `LLM_KIND`.
    #[error("[LLM Gateway] unsupported provider: {0}")]
    UnsupportedProvider(String),
}

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`GatewayError::Config`] with [`ConfigError::MissingVar`] if the
/// variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Parses an optional `u32` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`GatewayError::Config`] with [`ConfigError::InvalidNumber`] if
/// the variable is set but not a valid `u32`.
pub fn env_opt_u32(name: &'static str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<u32>().map(Some).map_err(|_| {
            GatewayError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u32",
            })
        }),
        _ => Ok(None),
    }
}

/// Builds a short single-line snippet from a response body for error
/// messages (at most `max` characters).
pub(crate) fn make_snippet(body: &str, max: usize) -> String {
    body.chars().take(max).collect::<String>().replace('\n', " ")
}
