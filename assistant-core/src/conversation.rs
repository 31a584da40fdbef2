//! Conversation orchestrator: the four-stage dialogue state machine.
//!
//! One conversation is an explicit [`ConversationState`] value threaded
//! through [`Orchestrator::submit`] calls; there is no ambient session
//! store. Every transition either fully populates the next stage's fields
//! or resets completely, so no stage can be re-entered with stale data.
//!
//! Stages:
//!
//! ```text
//! AwaitingInitialQuery --submit--> classify
//!     Recommendation:      retrieve + follow-up --> AwaitingFollowup
//!     Non-Recommendation:  docs retrieval + grounded answer --> ShowAnswer
//! AwaitingFollowup --submit--> refine + retrieve --> ShowFinal
//! ShowFinal / ShowAnswer --reset--> AwaitingInitialQuery
//! ```

use llm_gateway::TextGeneration;
use semantic_store::SemanticSearch;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    CoreError, Intent,
    answer::{DOCS_TOP_K, answer_from_context},
    followup::generate_followup,
    intent::classify_intent,
    products::{ProductPick, retrieve_products},
    refine::refine_query,
};

/// Where a conversation currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Waiting for the very first query.
    AwaitingInitialQuery,
    /// Initial products shown; waiting for the follow-up answer.
    AwaitingFollowup,
    /// Final ranked products ready; only a reset leaves this stage.
    ShowFinal,
    /// Grounded answer ready; only a reset leaves this stage.
    ShowAnswer,
}

/// Full session data for one conversation.
///
/// Created per conversation, mutated only by returning a new value from
/// [`Orchestrator::submit`], discarded on reset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversationState {
    pub stage: Stage,
    pub initial_query: Option<String>,
    pub intent: Option<Intent>,
    pub followup_question: Option<String>,
    pub initial_products: Vec<ProductPick>,
    pub refined_query: Option<String>,
    pub final_products: Vec<ProductPick>,
    pub answer: Option<String>,
}

impl ConversationState {
    /// Fresh conversation awaiting its first query.
    pub fn new() -> Self {
        Self {
            stage: Stage::AwaitingInitialQuery,
            initial_query: None,
            intent: None,
            followup_question: None,
            initial_products: Vec::new(),
            refined_query: None,
            final_products: Vec::new(),
            answer: None,
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequences the classifier, retriever, follow-up generator, refiner, and
/// answerer into the two-turn dialogue.
///
/// Holds only borrowed collaborators; all per-conversation data lives in
/// the [`ConversationState`] value, so independent conversations can run
/// concurrently with no shared mutable state.
pub struct Orchestrator<'a> {
    gateway: &'a dyn TextGeneration,
    catalog: &'a dyn SemanticSearch,
    docs: &'a dyn SemanticSearch,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        gateway: &'a dyn TextGeneration,
        catalog: &'a dyn SemanticSearch,
        docs: &'a dyn SemanticSearch,
    ) -> Self {
        Self {
            gateway,
            catalog,
            docs,
        }
    }

    /// Feeds one user input into the conversation and returns the next
    /// state.
    ///
    /// Blank or whitespace-only input is ignored: the state comes back
    /// unchanged and no external call is made. Inputs submitted in
    /// `ShowFinal`/`ShowAnswer` are likewise ignored; those stages only
    /// leave via [`Orchestrator::reset`].
    ///
    /// # Errors
    /// Propagates gateway/store failures, and rejects an
    /// `AwaitingFollowup` state that lost its original query.
    pub async fn submit(
        &self,
        state: ConversationState,
        input: &str,
    ) -> Result<ConversationState, CoreError> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(state);
        }

        match state.stage {
            Stage::AwaitingInitialQuery => self.handle_initial(text).await,
            Stage::AwaitingFollowup => self.handle_followup(state, text).await,
            Stage::ShowFinal | Stage::ShowAnswer => Ok(state),
        }
    }

    /// Discards all session state and starts a fresh conversation.
    pub fn reset(&self) -> ConversationState {
        ConversationState::new()
    }

    async fn handle_initial(&self, query: &str) -> Result<ConversationState, CoreError> {
        let intent = classify_intent(self.gateway, query).await?;

        match intent {
            Intent::Recommendation => {
                info!("recommendation flow for initial query");
                let initial_products = retrieve_products(self.catalog, query).await?;
                let followup_question = generate_followup(self.gateway, query).await?;

                Ok(ConversationState {
                    stage: Stage::AwaitingFollowup,
                    initial_query: Some(query.to_string()),
                    intent: Some(intent),
                    followup_question: Some(followup_question),
                    initial_products,
                    ..ConversationState::new()
                })
            }
            Intent::NonRecommendation | Intent::Unrecognized(_) => {
                // Off-label classifier output falls through to the grounded
                // answer path; the raw label stays in the state for logging.
                if let Intent::Unrecognized(label) = &intent {
                    debug!("unrecognized intent label {label:?}, taking answer path");
                }

                let hits = self.docs.search(query, DOCS_TOP_K).await?;
                let passages: Vec<String> = hits.into_iter().map(|h| h.text).collect();
                let answer = answer_from_context(self.gateway, &passages, query).await?;

                Ok(ConversationState {
                    stage: Stage::ShowAnswer,
                    initial_query: Some(query.to_string()),
                    intent: Some(intent),
                    answer: Some(answer),
                    ..ConversationState::new()
                })
            }
        }
    }

    async fn handle_followup(
        &self,
        state: ConversationState,
        answers: &str,
    ) -> Result<ConversationState, CoreError> {
        let query = state
            .initial_query
            .as_deref()
            .ok_or(CoreError::InvalidState(
                "awaiting follow-up without an initial query",
            ))?;

        let refined = refine_query(self.gateway, query, answers).await?;
        let final_products = retrieve_products(self.catalog, &refined).await?;

        Ok(ConversationState {
            stage: Stage::ShowFinal,
            refined_query: Some(refined),
            final_products,
            ..state
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semantic_store::{SearchHit, StoreError};
    use serde_json::json;
    use std::{
        collections::VecDeque,
        future::Future,
        pin::Pin,
        sync::Mutex,
    };

    /// Gateway stub that pops scripted replies in call order.
    struct ScriptedGen {
        replies: Mutex<VecDeque<String>>,
    }

    impl ScriptedGen {
        fn new(replies: &[&str]) -> Self {
            Self {
                replies: Mutex::new(replies.iter().map(|s| s.to_string()).collect()),
            }
        }
    }

    impl TextGeneration for ScriptedGen {
        fn generate<'a>(
            &'a self,
            _prompt: &'a str,
        ) -> Pin<Box<dyn Future<Output = llm_gateway::Result<String>> + Send + 'a>> {
            let next = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted gateway ran out of replies");
            Box::pin(async move { Ok(next) })
        }
    }

    struct CannedStore(Vec<SearchHit>);

    impl SemanticSearch for CannedStore {
        fn search<'a>(
            &'a self,
            _query: &'a str,
            _top_k: u64,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<SearchHit>, StoreError>> + Send + 'a>>
        {
            let hits = self.0.clone();
            Box::pin(async move { Ok(hits) })
        }
    }

    fn product(name: &str, price: f64, margin: f64) -> SearchHit {
        SearchHit {
            score: 0.8,
            text: String::new(),
            source: None,
            payload: json!({"Name": name, "price": price, "margin": margin}),
        }
    }

    fn passage(text: &str) -> SearchHit {
        SearchHit {
            score: 0.8,
            text: text.to_string(),
            source: Some("docs/philosophy.md".to_string()),
            payload: json!({"text": text}),
        }
    }

    #[tokio::test]
    async fn recommendation_flow_end_to_end() {
        let r#gen = ScriptedGen::new(&[
            "Recommendation",
            "1. What skin concern are you targeting?\n2. What is your skin type?",
            "Category: Serum\nDescription: Hydrating serum for dry skin, fragrance-free.\nTop Ingredients: Hyaluronic acid\nTags: dry skin, fragrance-free",
        ]);
        let catalog = CannedStore(vec![
            product("A", 10.0, 0.3),
            product("B", 20.0, 0.5),
        ]);
        let docs = CannedStore(vec![]);
        let orch = Orchestrator::new(&r#gen, &catalog, &docs);

        // Turn 1: initial query.
        let state = orch.submit(ConversationState::new(), "serums").await.unwrap();
        assert_eq!(state.stage, Stage::AwaitingFollowup);
        assert_eq!(state.intent, Some(Intent::Recommendation));
        assert_eq!(state.initial_query.as_deref(), Some("serums"));
        assert!(state.followup_question.as_deref().unwrap().contains("skin"));
        assert_eq!(state.initial_products[0].name, "B");

        // Turn 2: follow-up answer.
        let state = orch
            .submit(state, "dry skin, fragrance-free")
            .await
            .unwrap();
        assert_eq!(state.stage, Stage::ShowFinal);
        assert!(state.refined_query.as_deref().unwrap().contains("Category:"));
        let names: Vec<&str> = state.final_products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);

        // Reset discards everything.
        let fresh = orch.reset();
        assert_eq!(fresh.stage, Stage::AwaitingInitialQuery);
        assert!(fresh.initial_query.is_none());
        assert!(fresh.final_products.is_empty());
    }

    #[tokio::test]
    async fn informational_flow_returns_grounded_answer() {
        let r#gen = ScriptedGen::new(&[
            "Non-Recommendation",
            "Our philosophy is gentle, evidence-based skincare.",
        ]);
        let catalog = CannedStore(vec![]);
        let docs = CannedStore(vec![
            passage("We believe in gentle formulations."),
            passage("Every product is evidence-based."),
        ]);
        let orch = Orchestrator::new(&r#gen, &catalog, &docs);

        let state = orch
            .submit(ConversationState::new(), "What is the brand philosophy?")
            .await
            .unwrap();
        assert_eq!(state.stage, Stage::ShowAnswer);
        assert_eq!(state.intent, Some(Intent::NonRecommendation));
        assert!(!state.answer.as_deref().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unrecognized_intent_takes_the_answer_path() {
        let r#gen = ScriptedGen::new(&["Maybe a product?", "No relevant context."]);
        let catalog = CannedStore(vec![]);
        let docs = CannedStore(vec![passage("something unrelated")]);
        let orch = Orchestrator::new(&r#gen, &catalog, &docs);

        let state = orch
            .submit(ConversationState::new(), "hmm")
            .await
            .unwrap();
        assert_eq!(state.stage, Stage::ShowAnswer);
        assert_eq!(
            state.intent,
            Some(Intent::Unrecognized("Maybe a product?".to_string()))
        );
    }

    #[tokio::test]
    async fn blank_input_is_a_no_op() {
        let r#gen = ScriptedGen::new(&[]);
        let catalog = CannedStore(vec![]);
        let docs = CannedStore(vec![]);
        let orch = Orchestrator::new(&r#gen, &catalog, &docs);

        let state = orch
            .submit(ConversationState::new(), "   \n\t")
            .await
            .unwrap();
        assert_eq!(state.stage, Stage::AwaitingInitialQuery);
    }

    #[tokio::test]
    async fn terminal_stages_ignore_input() {
        let r#gen = ScriptedGen::new(&[]);
        let catalog = CannedStore(vec![]);
        let docs = CannedStore(vec![]);
        let orch = Orchestrator::new(&r#gen, &catalog, &docs);

        let mut state = ConversationState::new();
        state.stage = Stage::ShowAnswer;
        state.answer = Some("done".to_string());

        let next = orch.submit(state, "another question").await.unwrap();
        assert_eq!(next.stage, Stage::ShowAnswer);
        assert_eq!(next.answer.as_deref(), Some("done"));
    }

    #[tokio::test]
    async fn followup_without_initial_query_is_rejected() {
        let r#gen = ScriptedGen::new(&[]);
        let catalog = CannedStore(vec![]);
        let docs = CannedStore(vec![]);
        let orch = Orchestrator::new(&r#gen, &catalog, &docs);

        let mut state = ConversationState::new();
        state.stage = Stage::AwaitingFollowup;

        let err = orch.submit(state, "dry skin").await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidState(_)));
    }
}
