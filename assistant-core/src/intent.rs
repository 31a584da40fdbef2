//! Intent classification for incoming user queries.

use llm_gateway::TextGeneration;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CoreError, prompt};

/// Categorical routing decision for one user query.
///
/// The model is asked for exactly two canonical labels; anything else is
/// preserved verbatim in [`Intent::Unrecognized`] and handled explicitly by
/// the orchestrator instead of being trusted downstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Product-seeking query: route to the recommendation flow.
    Recommendation,
    /// Informational query: route to the context-grounded answer flow.
    NonRecommendation,
    /// Off-label model output, kept for logging and explicit handling.
    Unrecognized(String),
}

impl Intent {
    /// Parses a raw model completion into a tagged intent.
    ///
    /// Surrounding whitespace is stripped before matching; the two
    /// canonical labels are matched exactly.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Recommendation" => Intent::Recommendation,
            "Non-Recommendation" => Intent::NonRecommendation,
            other => Intent::Unrecognized(other.to_string()),
        }
    }
}

impl std::fmt::Display for Intent {
    /// Canonical wire label; off-label output is echoed verbatim.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Recommendation => f.write_str("Recommendation"),
            Intent::NonRecommendation => f.write_str("Non-Recommendation"),
            Intent::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// Classifies a raw user query as recommendation-seeking or informational.
///
/// Renders the few-shot intent prompt, invokes the gateway once, and parses
/// the trimmed completion. Deterministic given a deterministic gateway.
///
/// # Errors
/// Propagates gateway failures unmodified.
pub async fn classify_intent(
    gateway: &dyn TextGeneration,
    query: &str,
) -> Result<Intent, CoreError> {
    let rendered = prompt::intent_prompt(query);
    let raw = gateway.generate(&rendered).await?;
    let intent = Intent::parse(&raw);
    debug!("classified query as {:?}", intent);
    Ok(intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{future::Future, pin::Pin, sync::atomic::{AtomicUsize, Ordering}};

    struct FixedGen {
        reply: String,
        calls: AtomicUsize,
    }

    impl FixedGen {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TextGeneration for FixedGen {
        fn generate<'a>(
            &'a self,
            _prompt: &'a str,
        ) -> Pin<Box<dyn Future<Output = llm_gateway::Result<String>> + Send + 'a>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move { Ok(self.reply.clone()) })
        }
    }

    #[test]
    fn parse_canonical_labels() {
        assert_eq!(Intent::parse("Recommendation"), Intent::Recommendation);
        assert_eq!(Intent::parse("Non-Recommendation"), Intent::NonRecommendation);
    }

    #[test]
    fn parse_strips_whitespace() {
        assert_eq!(Intent::parse("  Recommendation \n"), Intent::Recommendation);
    }

    #[test]
    fn parse_preserves_off_label_output() {
        let got = Intent::parse("Maybe?");
        assert_eq!(got, Intent::Unrecognized("Maybe?".to_string()));
    }

    #[tokio::test]
    async fn classify_is_idempotent_with_deterministic_gateway() {
        let r#gen = FixedGen::new("\nNon-Recommendation  ");
        let a = classify_intent(&r#gen, "what is the brand philosophy?").await.unwrap();
        let b = classify_intent(&r#gen, "what is the brand philosophy?").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Intent::NonRecommendation);
        assert_eq!(r#gen.calls.load(Ordering::SeqCst), 2);
    }
}
