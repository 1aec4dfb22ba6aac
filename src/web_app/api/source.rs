// web_app/api/source.rs - Catalog source abstraction and shared handle
//
// The storefront never talks to a concrete backend directly. Server functions
// resolve an injected `SharedCatalog` (context, else the global) and
// run GROQ queries through it.

use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while querying the catalog backend
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog configuration error: {0}")]
    Config(String),

    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A GROQ query plus its `$name` parameters
#[derive(Clone, Debug, PartialEq)]
pub struct GroqQuery {
    pub query: String,
    pub params: Vec<(String, Value)>,
}

impl GroqQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }
}

/// Read-only query capability over the content backend
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Runs a query and returns the `result` member of the response.
    async fn fetch(&self, query: &GroqQuery) -> Result<Value, CatalogError>;
}

pub type SharedCatalog = Arc<dyn CatalogSource>;

static CATALOG: OnceLock<SharedCatalog> = OnceLock::new();
static TEST_CATALOG_OVERRIDE: Mutex<Option<SharedCatalog>> = Mutex::new(None);

/// Install the process-wide catalog source
pub fn init_catalog(catalog: SharedCatalog) {
    tracing::info!("Initializing global catalog source");
    if CATALOG.set(catalog).is_err() {
        tracing::warn!("Catalog source already initialized");
    }
}

/// Replace the catalog source for the current test process
pub fn set_test_catalog(catalog: SharedCatalog) {
    match TEST_CATALOG_OVERRIDE.lock() {
        Ok(mut guard) => *guard = Some(catalog),
        Err(poisoned) => *poisoned.into_inner() = Some(catalog),
    }
}

/// Get the active catalog source, preferring a test override
pub fn get_catalog() -> Option<SharedCatalog> {
    if let Ok(guard) = TEST_CATALOG_OVERRIDE.lock() {
        if let Some(ref catalog) = *guard {
            return Some(catalog.clone());
        }
    }

    let catalog = CATALOG.get().cloned();
    if catalog.is_none() {
        tracing::warn!("Global catalog source is empty!");
    }
    catalog
}
