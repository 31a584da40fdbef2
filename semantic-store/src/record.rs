//! Core data models used by the library.

use serde::Serialize;
use serde_json::Value;

/// A single retrieval hit with score, primary text, and full payload.
///
/// `text` is the record's `text` payload field when present (docs
/// collection); catalog records keep their attributes in `payload` and may
/// leave `text` empty.
#[derive(Clone, Debug, Serialize)]
pub struct SearchHit {
    pub score: f32,
    pub text: String,
    pub source: Option<String>,
    pub payload: Value,
}
