pub mod conversation_route;
pub mod health_route;
pub mod intent_route;
pub mod products_route;
pub mod questions_route;
pub mod rag_route;
pub mod refine_route;
