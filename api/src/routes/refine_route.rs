//! POST /api/recommendation/final — structured refined query.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use assistant_core::refine_query;

use crate::{core::app_state::AppState, error_handler::AppResult};

/// Request payload for /api/recommendation/final.
#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    /// The user's original query.
    pub query: String,
    /// Free-text answers to the follow-up questions.
    pub answers: String,
}

/// Response payload for /api/recommendation/final.
#[derive(Debug, Serialize)]
pub struct RefineResponse {
    /// Structured enriched query (Category/Description/Top Ingredients/Tags
    /// convention), passed downstream as opaque text.
    pub recommendation: String,
}

/// Handler: POST /api/recommendation/final
pub async fn get_refined_query(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RefineRequest>,
) -> AppResult<Json<RefineResponse>> {
    let recommendation =
        refine_query(state.gateway.as_ref(), &body.query, &body.answers).await?;
    Ok(Json(RefineResponse { recommendation }))
}
