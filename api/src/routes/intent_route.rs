//! POST /api/intent — classifies a user query.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use assistant_core::classify_intent;

use crate::{core::app_state::AppState, error_handler::AppResult};

/// Request payload for /api/intent.
#[derive(Debug, Deserialize)]
pub struct IntentRequest {
    /// Raw user query text.
    pub query: String,
}

/// Response payload for /api/intent.
#[derive(Debug, Serialize)]
pub struct IntentResponse {
    /// Trimmed classifier label (`Recommendation`, `Non-Recommendation`,
    /// or the raw off-label output).
    pub intent: String,
}

/// Handler: POST /api/intent
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/api/intent \
///   -H 'content-type: application/json' \
///   -d '{"query":"serums"}'
/// ```
pub async fn get_intent(
    State(state): State<Arc<AppState>>,
    Json(body): Json<IntentRequest>,
) -> AppResult<Json<IntentResponse>> {
    let intent = classify_intent(state.gateway.as_ref(), &body.query).await?;
    Ok(Json(IntentResponse {
        intent: intent.to_string(),
    }))
}
