//! Follow-up question generation for recommendation-style queries.

use llm_gateway::TextGeneration;

use crate::{CoreError, prompt};

/// Generates 2–3 short, contextual clarifying questions for a query already
/// classified as a recommendation request.
///
/// The result is free text shown to the user as a single block; question
/// count and structure are not validated.
///
/// # Errors
/// Propagates gateway failures unmodified.
pub async fn generate_followup(
    gateway: &dyn TextGeneration,
    query: &str,
) -> Result<String, CoreError> {
    let rendered = prompt::followup_prompt(query);
    let raw = gateway.generate(&rendered).await?;
    Ok(raw.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{future::Future, pin::Pin};

    struct EchoGen;

    impl TextGeneration for EchoGen {
        fn generate<'a>(
            &'a self,
            _prompt: &'a str,
        ) -> Pin<Box<dyn Future<Output = llm_gateway::Result<String>> + Send + 'a>> {
            Box::pin(async { Ok("  1. What skin type?\n2. Any allergies?  \n".to_string()) })
        }
    }

    #[tokio::test]
    async fn followup_output_is_trimmed() {
        let got = generate_followup(&EchoGen, "serums").await.unwrap();
        assert_eq!(got, "1. What skin type?\n2. Any allergies?");
    }
}
