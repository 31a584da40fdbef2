//! GET /health — gateway reachability probe.

use std::sync::Arc;

use axum::{Json, extract::State};

use llm_gateway::HealthStatus;

use crate::core::app_state::AppState;

/// Handler: GET /health
///
/// Best-effort: a broken provider is reported as `ok=false`, never as an
/// HTTP error.
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(state.gateway.health().await)
}
