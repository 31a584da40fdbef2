//! Query refinement: enriching the original query with follow-up answers.

use llm_gateway::TextGeneration;

use crate::{CoreError, prompt};

/// Produces a structured, enriched query for semantic retrieval from the
/// original query and the user's free-text follow-up answers.
///
/// The Category/Description/Top Ingredients/Tags layout is a prompting
/// convention that biases similarity search; the output is treated as
/// opaque text downstream and is not parsed or validated here. Malformed
/// model output passes through unchanged.
///
/// # Errors
/// Propagates gateway failures unmodified.
pub async fn refine_query(
    gateway: &dyn TextGeneration,
    query: &str,
    answers: &str,
) -> Result<String, CoreError> {
    let rendered = prompt::refine_prompt(query, answers);
    let raw = gateway.generate(&rendered).await?;
    Ok(raw.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{future::Future, pin::Pin};

    struct StructuredGen;

    impl TextGeneration for StructuredGen {
        fn generate<'a>(
            &'a self,
            _prompt: &'a str,
        ) -> Pin<Box<dyn Future<Output = llm_gateway::Result<String>> + Send + 'a>> {
            Box::pin(async {
                Ok("\nCategory: Serum\nDescription: Hydrating serum for dry skin.\nTop Ingredients: Hyaluronic acid\nTags: dry skin, fragrance-free\n".to_string())
            })
        }
    }

    #[tokio::test]
    async fn refined_query_is_trimmed_and_structured() {
        let got = refine_query(&StructuredGen, "serums", "dry skin, fragrance-free")
            .await
            .unwrap();
        assert!(got.starts_with("Category:"));
        assert!(got.contains("Tags: dry skin"));
    }

    #[tokio::test]
    async fn refine_is_idempotent_with_deterministic_gateway() {
        let a = refine_query(&StructuredGen, "serums", "dry").await.unwrap();
        let b = refine_query(&StructuredGen, "serums", "dry").await.unwrap();
        assert_eq!(a, b);
    }
}
