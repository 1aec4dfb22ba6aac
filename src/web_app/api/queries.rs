// web_app/api/queries.rs - Catalog queries used by the storefront
//
// All reads go through an injected `CatalogSource`, so tests can substitute
// a fake backend.

use serde_json::Value;

use super::source::{CatalogError, CatalogSource, GroqQuery};
use crate::web_app::model::{CatalogState, Product};

/// Every product document, unfiltered and in backend order.
pub const ALL_PRODUCTS_QUERY: &str = r#"*[_type == "product"]"#;

/// One product, matched by document id or by its own `id` field.
pub const PRODUCT_BY_ID_QUERY: &str = r#"*[_type == "product" && (_id == $id || id == $id)][0]"#;

/// Fetch the full product collection
///
/// A `null` result is treated as an empty catalog.
pub async fn fetch_all_products(source: &dyn CatalogSource) -> Result<Vec<Product>, CatalogError> {
    tracing::info!("Fetching product catalog");

    let result = source.fetch(&GroqQuery::new(ALL_PRODUCTS_QUERY)).await?;
    let products: Vec<Product> = match result {
        Value::Null => Vec::new(),
        other => serde_json::from_value(other)?,
    };

    tracing::info!("Catalog returned {} products", products.len());
    Ok(products)
}

/// The storefront load effect: one read, settled into a view state.
pub async fn load_catalog(source: &dyn CatalogSource) -> CatalogState {
    let outcome = fetch_all_products(source).await;
    if let Err(ref e) = outcome {
        tracing::error!("Catalog load failed: {}", e);
    }
    CatalogState::from(outcome)
}

/// Fetch a single product for the detail page
pub async fn fetch_product(source: &dyn CatalogSource, id: &str) -> Result<Option<Product>, CatalogError> {
    let query = GroqQuery::new(PRODUCT_BY_ID_QUERY).param("id", id);
    let result = source.fetch(&query).await?;

    match result {
        Value::Null => Ok(None),
        other => Ok(Some(serde_json::from_value(other)?)),
    }
}
