// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates the real body on the server and an HTTP stub
// on the client, so this file must compile for BOTH ssr and hydrate.

use leptos::prelude::*;
use crate::web_app::model::*;

/// Resolve the catalog: a context-provided source wins over the global one.
#[cfg(feature = "ssr")]
async fn catalog() -> Result<crate::web_app::api::SharedCatalog, ServerFnError> {
    use crate::web_app::api::{source, SharedCatalog};

    if let Some(catalog) = use_context::<SharedCatalog>() {
        return Ok(catalog);
    }

    source::get_catalog().ok_or_else(|| ServerFnError::new("Catalog source not available"))
}

/// List every product in the catalog, in backend order
///
/// Runs `load_catalog` once and hands its settled state back over the wire.
#[server(ListProducts, "/api")]
pub async fn list_products() -> Result<Vec<Product>, ServerFnError> {
    use crate::web_app::api::queries;

    let catalog = catalog().await?;

    match queries::load_catalog(catalog.as_ref()).await {
        CatalogState::Loaded(products) => Ok(products),
        CatalogState::Failed(reason) => Err(ServerFnError::new(format!("Could not load products: {}", reason))),
        CatalogState::Loading => Err(ServerFnError::new("Catalog load did not settle")),
    }
}

/// Get a single product by identifier
#[server(GetProduct, "/api")]
pub async fn get_product(id: String) -> Result<Option<Product>, ServerFnError> {
    use crate::web_app::api::queries;

    tracing::info!("Product request: id='{}'", id);
    let catalog = catalog().await?;

    queries::fetch_product(catalog.as_ref(), &id)
        .await
        .map_err(|e| {
            tracing::error!("Fetching product {} failed: {}", id, e);
            ServerFnError::new(format!("Could not load product: {}", e))
        })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::fixtures::{sample_catalog, StaticCatalog};
    use crate::web_app::api::SharedCatalog;

    #[tokio::test]
    async fn test_catalog_prefers_context_source() {
        let owner = Owner::new();
        owner.set();
        let provided: SharedCatalog = Arc::new(StaticCatalog::ok(sample_catalog()));
        provide_context(provided.clone());

        let resolved = catalog().await;
        assert!(matches!(resolved, Ok(ref c) if Arc::ptr_eq(c, &provided)));
    }

    #[tokio::test]
    async fn test_catalog_missing_without_context_or_global() {
        let owner = Owner::new();
        owner.set();

        let err = catalog().await.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(err.contains("Catalog source not available"));
    }

    #[tokio::test]
    async fn test_list_products_settles_through_load_catalog() {
        let owner = Owner::new();
        owner.set();
        let failing = Arc::new(StaticCatalog::failing("dataset unavailable"));
        provide_context::<SharedCatalog>(failing.clone());

        let err = list_products().await.unwrap_err().to_string();
        assert!(err.contains("Could not load products"));
        assert!(err.contains("dataset unavailable"));
        assert_eq!(failing.calls().len(), 1);
    }
}
