//! POST /api/products — margin-ranked catalog retrieval.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use assistant_core::{ProductPick, retrieve_products};

use crate::{core::app_state::AppState, error_handler::AppResult};

/// Request payload for /api/products.
#[derive(Debug, Deserialize)]
pub struct ProductsRequest {
    /// Raw or refined query text.
    pub query: String,
}

/// Response payload for /api/products.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    /// Candidates sorted by margin, descending.
    pub products: Vec<ProductPick>,
}

/// Handler: POST /api/products
pub async fn get_products(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ProductsRequest>,
) -> AppResult<Json<ProductsResponse>> {
    let products = retrieve_products(state.catalog.as_ref(), &body.query).await?;
    Ok(Json(ProductsResponse { products }))
}
