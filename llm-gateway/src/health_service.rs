//! Universal health service for LLM backends (Ollama, OpenAI).
//!
//! This module exposes lightweight health checks for supported providers:
//! - Ollama: `GET {endpoint}/api/tags` (best-effort model existence check)
//! - OpenAI: `GET {endpoint}/v1/models` with Bearer auth
//!
//! The returned [`HealthStatus`] is JSON-serializable and suitable for a
//! `/health` endpoint. The `check_*` methods are resilient and never fail
//! (errors mapped to `ok=false`).

use std::time::{Duration, Instant};

use reqwest::header;
use serde::Serialize;
use tracing::debug;

use crate::error_handler::Result;

/// A serializable health snapshot for a single provider/config.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Backend/provider (e.g., "Ollama", "OpenAi").
    pub provider: String,
    /// Target endpoint base URL.
    pub endpoint: String,
    /// Optional model identifier relevant to the probe (if any).
    pub model: Option<String>,
    /// Overall health flag.
    pub ok: bool,
    /// Measured HTTP latency in milliseconds for the main probe.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

impl HealthStatus {
    fn done(
        provider: &str,
        endpoint: &str,
        model: Option<&str>,
        ok: bool,
        latency_ms: u128,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.to_string(),
            endpoint: endpoint.to_string(),
            model: model.map(str::to_string),
            ok,
            latency_ms,
            message: message.into(),
        }
    }
}

/// A universal health checker that reuses a single HTTP client.
///
/// The client is constructed with a default timeout shared by all probes.
pub struct HealthService {
    client: reqwest::Client,
}

impl HealthService {
    /// Creates a new health service with an optional client timeout (seconds).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self> {
        let timeout = timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(10));
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Probes an Ollama endpoint via `GET /api/tags`.
    pub async fn check_ollama(&self, endpoint: &str, model: Option<&str>) -> HealthStatus {
        let url = format!("{}/api/tags", endpoint.trim_end_matches('/'));
        debug!("GET {url}");
        let started = Instant::now();

        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => HealthStatus::done(
                "Ollama",
                endpoint,
                model,
                true,
                started.elapsed().as_millis(),
                "endpoint reachable",
            ),
            Ok(resp) => HealthStatus::done(
                "Ollama",
                endpoint,
                model,
                false,
                started.elapsed().as_millis(),
                format!("HTTP {}", resp.status()),
            ),
            Err(e) => HealthStatus::done(
                "Ollama",
                endpoint,
                model,
                false,
                started.elapsed().as_millis(),
                format!("transport error: {e}"),
            ),
        }
    }

    /// Probes an OpenAI endpoint via `GET /v1/models` with Bearer auth.
    pub async fn check_openai(
        &self,
        endpoint: &str,
        api_key: Option<&str>,
        model: Option<&str>,
    ) -> HealthStatus {
        let url = format!("{}/v1/models", endpoint.trim_end_matches('/'));
        debug!("GET {url}");
        let started = Instant::now();

        let mut req = self.client.get(&url);
        if let Some(key) = api_key {
            req = req.header(header::AUTHORIZATION, format!("Bearer {key}"));
        }

        match req.send().await {
            Ok(resp) if resp.status().is_success() => HealthStatus::done(
                "OpenAi",
                endpoint,
                model,
                true,
                started.elapsed().as_millis(),
                "endpoint reachable",
            ),
            Ok(resp) => HealthStatus::done(
                "OpenAi",
                endpoint,
                model,
                false,
                started.elapsed().as_millis(),
                format!("HTTP {}", resp.status()),
            ),
            Err(e) => HealthStatus::done(
                "OpenAi",
                endpoint,
                model,
                false,
                started.elapsed().as_millis(),
                format!("transport error: {e}"),
            ),
        }
    }
}
