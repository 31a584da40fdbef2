//! Product retrieval and margin-based ranking.

use semantic_store::{SearchHit, SemanticSearch};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CoreError;

/// Number of catalog candidates requested per retrieval pass.
pub const CATALOG_TOP_K: u64 = 5;

/// Minimal display projection of a catalog record.
///
/// Exactly these three fields; any other catalog metadata is dropped at
/// projection time. Field casing follows the catalog schema (`Name` is
/// capitalized upstream).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductPick {
    #[serde(rename = "Name")]
    pub name: String,
    pub price: f64,
    pub margin: f64,
}

/// Retrieves the top catalog candidates for a query string and returns them
/// ranked by margin, descending.
///
/// The query may be the raw initial text or a refined structured query;
/// either way it is passed to the store as opaque text.
///
/// # Errors
/// - [`CoreError::Store`] if the similarity search fails
/// - [`CoreError::MissingField`] if any candidate lacks `Name`, `price`, or
///   `margin` (the whole request fails; no fallback value is substituted)
pub async fn retrieve_products(
    catalog: &dyn SemanticSearch,
    query: &str,
) -> Result<Vec<ProductPick>, CoreError> {
    let hits = catalog.search(query, CATALOG_TOP_K).await?;
    debug!("catalog returned {} candidates", hits.len());
    rank_by_margin(hits)
}

/// Projects candidates to `{Name, price, margin}` and stable-sorts by
/// margin, descending. Ties keep retrieval order.
fn rank_by_margin(hits: Vec<SearchHit>) -> Result<Vec<ProductPick>, CoreError> {
    let mut picks = Vec::with_capacity(hits.len());
    for hit in hits {
        picks.push(project(&hit)?);
    }

    // Vec::sort_by is stable, which preserves retrieval order on equal margins.
    picks.sort_by(|a, b| b.margin.total_cmp(&a.margin));
    Ok(picks)
}

fn project(hit: &SearchHit) -> Result<ProductPick, CoreError> {
    let name = hit
        .payload
        .get("Name")
        .and_then(|v| v.as_str())
        .ok_or(CoreError::MissingField { field: "Name" })?
        .to_string();
    let price = hit
        .payload
        .get("price")
        .and_then(|v| v.as_f64())
        .ok_or(CoreError::MissingField { field: "price" })?;
    let margin = hit
        .payload
        .get("margin")
        .and_then(|v| v.as_f64())
        .ok_or(CoreError::MissingField { field: "margin" })?;

    Ok(ProductPick {
        name,
        price,
        margin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use semantic_store::StoreError;
    use serde_json::json;
    use std::{future::Future, pin::Pin};

    struct CannedCatalog(Vec<SearchHit>);

    impl SemanticSearch for CannedCatalog {
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

    fn hit(payload: serde_json::Value) -> SearchHit {
        SearchHit {
            score: 0.9,
            text: String::new(),
            source: None,
            payload,
        }
    }

    #[tokio::test]
    async fn ranks_by_margin_descending() {
        let catalog = CannedCatalog(vec![
            hit(json!({"Name": "A", "price": 10.0, "margin": 0.3})),
            hit(json!({"Name": "B", "price": 20.0, "margin": 0.5})),
        ]);
        let picks = retrieve_products(&catalog, "serums").await.unwrap();
        let names: Vec<&str> = picks.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[tokio::test]
    async fn equal_margins_keep_retrieval_order() {
        let catalog = CannedCatalog(vec![
            hit(json!({"Name": "first", "price": 5.0, "margin": 0.4})),
            hit(json!({"Name": "second", "price": 7.0, "margin": 0.4})),
            hit(json!({"Name": "third", "price": 9.0, "margin": 0.4})),
        ]);
        let picks = retrieve_products(&catalog, "toners").await.unwrap();
        let names: Vec<&str> = picks.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn projection_keeps_exactly_three_fields() {
        let catalog = CannedCatalog(vec![hit(json!({
            "Name": "A", "price": 10.0, "margin": 0.3,
            "brand": "Acme", "sku": "X-1"
        }))]);
        let picks = retrieve_products(&catalog, "serums").await.unwrap();
        let value = serde_json::to_value(&picks[0]).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert!(value.get("Name").is_some());
        assert!(value.get("price").is_some());
        assert!(value.get("margin").is_some());
        assert!(value.get("brand").is_none());
    }

    #[tokio::test]
    async fn missing_margin_fails_the_request() {
        let catalog = CannedCatalog(vec![
            hit(json!({"Name": "A", "price": 10.0, "margin": 0.3})),
            hit(json!({"Name": "B", "price": 20.0})),
        ]);
        let err = retrieve_products(&catalog, "serums").await.unwrap_err();
        assert!(matches!(err, CoreError::MissingField { field: "margin" }));
    }

    #[tokio::test]
    async fn integer_prices_are_accepted() {
        let catalog = CannedCatalog(vec![hit(json!({"Name": "A", "price": 10, "margin": 1}))]);
        let picks = retrieve_products(&catalog, "serums").await.unwrap();
        assert_eq!(picks[0].price, 10.0);
        assert_eq!(picks[0].margin, 1.0);
    }
}
