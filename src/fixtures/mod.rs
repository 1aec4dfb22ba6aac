// fixtures/mod.rs - Test fixtures module
//
// Reusable catalog data and an in-memory catalog source, so page and query
// tests can run without a live Sanity project.

pub mod products;

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::web_app::api::{CatalogError, CatalogSource, GroqQuery};

pub use products::{sample_catalog, sample_products};

/// Catalog source answering every query with one canned response
///
/// Records each query it receives so tests can assert on what was asked.
pub struct StaticCatalog {
    response: Result<Value, String>,
    calls: Mutex<Vec<GroqQuery>>,
}

impl StaticCatalog {
    pub fn ok(result: Value) -> Self {
        Self {
            response: Ok(result),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A backend that rejects every read with `503`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<GroqQuery> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch(&self, query: &GroqQuery) -> Result<Value, CatalogError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(query.clone());
        }

        match &self.response {
            Ok(result) => Ok(result.clone()),
            Err(message) => Err(CatalogError::Status {
                status: 503,
                body: message.clone(),
            }),
        }
    }
}
