//! HTTP boundary layer over the assistant core.
//!
//! Thin axum adapter: request/response schemas, input validation for the
//! RAG path, status-code mapping, and process wiring. All decision logic
//! lives in `assistant-core`.

use std::{env, sync::Arc};

mod core;
pub mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::core::app_state::AppState;
use crate::error_handler::{AppError, AppResult};
use crate::routes::{
    conversation_route::post_conversation, health_route::get_health, intent_route::get_intent,
    products_route::get_products, questions_route::get_questions, rag_route::get_rag_response,
    refine_route::get_refined_query,
};

pub async fn start() -> AppResult<()> {
    let host_url =
        env::var("API_ADDRESS").map_err(|_| AppError::MissingEnv("API_ADDRESS"))?;

    let state = Arc::new(AppState::from_env()?);

    let app = Router::new()
        .route("/api/intent", post(get_intent))
        .route("/api/recommendation/questions", post(get_questions))
        .route("/api/recommendation/final", post(get_refined_query))
        .route("/api/rag", post(get_rag_response))
        .route("/api/products", post(get_products))
        .route("/api/conversation", post(post_conversation))
        .route("/health", get(get_health))
        .with_state(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!("listening on {host_url}");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    // Wait for the Ctrl+C signal
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
