//! POST /api/recommendation/questions — follow-up questions for a query.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use assistant_core::generate_followup;

use crate::{core::app_state::AppState, error_handler::AppResult};

/// Request payload for /api/recommendation/questions.
#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    /// Query already classified as a recommendation request.
    pub query: String,
}

/// Response payload for /api/recommendation/questions.
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    /// 2–3 clarifying questions as one free-text block.
    pub questions: String,
}

/// Handler: POST /api/recommendation/questions
pub async fn get_questions(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QuestionsRequest>,
) -> AppResult<Json<QuestionsResponse>> {
    let questions = generate_followup(state.gateway.as_ref(), &body.query).await?;
    Ok(Json(QuestionsResponse { questions }))
}
