//! Assistant core: query routing and multi-turn recommendation refinement.
//!
//! Raw user text enters the [`conversation::Orchestrator`], gets classified
//! as a recommendation or informational query, and is routed to one of two
//! flows:
//!
//! - **Recommendation**: retrieve an initial margin-ranked product list,
//!   ask 2–3 clarifying questions, refine the query from the user's
//!   answers, retrieve the final ranked list.
//! - **Informational**: retrieve grounding passages from the docs store and
//!   answer strictly from that context.
//!
//! All model interaction goes through the [`llm_gateway::TextGeneration`]
//! seam and all retrieval through [`semantic_store::SemanticSearch`], so
//! every operation here is testable with deterministic stubs.

mod answer;
mod conversation;
mod error;
mod followup;
mod intent;
mod products;
pub mod prompt;
mod refine;

pub use answer::{DOCS_TOP_K, answer_from_context};
pub use conversation::{ConversationState, Orchestrator, Stage};
pub use error::CoreError;
pub use followup::generate_followup;
pub use intent::{Intent, classify_intent};
pub use products::{CATALOG_TOP_K, ProductPick, retrieve_products};
pub use refine::refine_query;
