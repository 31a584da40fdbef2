//! POST /api/conversation — one orchestrator transition per request.
//!
//! The conversation state is an explicit value threaded through requests:
//! the client sends back the state it last received (or nothing to start a
//! fresh conversation) together with one user input. Each request is an
//! independent unit of work; the server keeps no session store.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use assistant_core::ConversationState;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
};

/// Request payload for /api/conversation.
#[derive(Debug, Deserialize)]
pub struct ConversationRequest {
    /// State returned by the previous call; omit to start fresh.
    #[serde(default)]
    pub state: Option<ConversationState>,
    /// One user input for this turn.
    #[serde(default)]
    pub input: Option<String>,
    /// Discard the session and start over ("Start Over" / "New Query").
    #[serde(default)]
    pub reset: bool,
}

/// Response payload for /api/conversation.
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    /// Next conversation state; send it back on the following turn.
    pub state: ConversationState,
}

/// Handler: POST /api/conversation
pub async fn post_conversation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ConversationRequest>,
) -> AppResult<Json<ConversationResponse>> {
    let orchestrator = state.orchestrator();

    if body.reset {
        return Ok(Json(ConversationResponse {
            state: orchestrator.reset(),
        }));
    }

    let input = body
        .input
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("'input' is required unless 'reset' is set".into()))?;
    let current = body.state.unwrap_or_else(|| state.fresh_conversation());

    let next = orchestrator.submit(current, input).await?;
    Ok(Json(ConversationResponse { state: next }))
}
