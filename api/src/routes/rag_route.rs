//! POST /api/rag — context-grounded answering.
//!
//! The boundary owns input validation for this path: the `results` value
//! must carry a `documents` key holding passages as strings (either one
//! flat list, or a list of per-query groups of which only the first is
//! used). Anything else is rejected with a client-input error before the
//! answerer — and therefore the model — is ever invoked.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use assistant_core::answer_from_context;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
};

/// Fallback body when the model produced an empty/whitespace-only answer.
const NO_INFORMATION_FOUND: &str = "No relevant information found in the provided context.";

/// Request payload for /api/rag.
#[derive(Debug, Deserialize)]
pub struct RagRequest {
    /// Retrieval results; must contain a `documents` key.
    pub results: Value,
    /// The question to answer from the provided context.
    pub user_question: String,
}

/// Response payload for /api/rag.
#[derive(Debug, Serialize)]
pub struct RagResponse {
    /// Grounded answer, or the no-information fallback message.
    pub response: String,
    pub status: &'static str,
}

/// Handler: POST /api/rag
pub async fn get_rag_response(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RagRequest>,
) -> AppResult<Json<RagResponse>> {
    if body.user_question.trim().is_empty() {
        return Err(AppError::BadRequest(
            "'user_question' cannot be empty".into(),
        ));
    }

    let passages = extract_passages(&body.results)?;
    let answer =
        answer_from_context(state.gateway.as_ref(), &passages, &body.user_question).await?;

    if answer.is_empty() {
        // An empty result is a valid outcome, not an error.
        return Ok(Json(RagResponse {
            response: NO_INFORMATION_FOUND.to_string(),
            status: "success",
        }));
    }

    Ok(Json(RagResponse {
        response: answer,
        status: "success",
    }))
}

/// Validates the `results` shape and pulls out the grounding passages.
///
/// Accepted shapes under `documents`:
/// - `["passage", ...]` — one flat group
/// - `[["passage", ...], ...]` — per-query groups; only the first is used
///
/// # Errors
/// Returns [`AppError::BadRequest`] when the key is missing, is not a
/// list, or contains non-string passages.
fn extract_passages(results: &Value) -> Result<Vec<String>, AppError> {
    let documents = results.get("documents").ok_or_else(|| {
        AppError::BadRequest(
            "'results' must contain 'documents' key with a list of context strings".into(),
        )
    })?;

    let groups = documents
        .as_array()
        .ok_or_else(|| AppError::BadRequest("'documents' must be a list".into()))?;

    let first_group = match groups.first() {
        None => return Ok(Vec::new()),
        Some(Value::Array(group)) => group.as_slice(),
        // Flat shape: the whole list is the single group.
        Some(_) => groups.as_slice(),
    };

    first_group
        .iter()
        .map(|doc| {
            doc.as_str().map(str::to_string).ok_or_else(|| {
                AppError::BadRequest("'documents' must be a list of strings".into())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_documents_key_is_a_client_error() {
        let err = extract_passages(&json!({"metadatas": []})).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn non_string_passages_are_rejected() {
        let err = extract_passages(&json!({"documents": [["ok", 42]]})).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn nested_shape_uses_first_group_only() {
        let got =
            extract_passages(&json!({"documents": [["a", "b"], ["ignored"]]})).unwrap();
        assert_eq!(got, ["a", "b"]);
    }

    #[test]
    fn flat_shape_is_one_group() {
        let got = extract_passages(&json!({"documents": ["a", "b"]})).unwrap();
        assert_eq!(got, ["a", "b"]);
    }

    #[test]
    fn empty_documents_yield_no_passages() {
        let got = extract_passages(&json!({"documents": []})).unwrap();
        assert!(got.is_empty());
    }
}
