// web_app/api/sanity.rs - Sanity content lake client
//
// Runs GROQ queries over the HTTP query API:
//   GET https://{project}.api.sanity.io/v{version}/data/query/{dataset}?query=...&$param=...

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::source::{CatalogError, CatalogSource, GroqQuery};

pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2025-01-01";

/// Connection settings for one Sanity dataset
#[derive(Clone, Debug, PartialEq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub token: Option<String>,
}

impl SanityConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            use_cdn: false,
            token: None,
        }
    }

    /// Reads `SANITY_*` variables, loading `.env` first if present.
    pub fn from_env() -> Result<Self, CatalogError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CatalogError> {
        let project_id = lookup("SANITY_PROJECT_ID")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| CatalogError::Config("SANITY_PROJECT_ID must be set".to_string()))?;

        let mut config = Self::new(project_id.trim());
        if let Some(dataset) = lookup("SANITY_DATASET").filter(|v| !v.is_empty()) {
            config.dataset = dataset;
        }
        if let Some(version) = lookup("SANITY_API_VERSION").filter(|v| !v.is_empty()) {
            config.api_version = version.trim_start_matches('v').to_string();
        }
        config.use_cdn = lookup("SANITY_USE_CDN")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        config.token = lookup("SANITY_TOKEN").filter(|v| !v.is_empty());

        Ok(config)
    }

    /// Query endpoint for this project and dataset.
    pub fn query_url(&self) -> String {
        let host = if self.use_cdn { "apicdn.sanity.io" } else { "api.sanity.io" };
        format!(
            "https://{}.{}/v{}/data/query/{}",
            self.project_id, host, self.api_version, self.dataset
        )
    }
}

/// Response envelope of the query endpoint
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    ms: Option<u64>,
}

/// Extracts `result` from a raw query response body.
pub fn parse_query_response(body: &str) -> Result<Value, CatalogError> {
    let response: QueryResponse = serde_json::from_str(body)?;
    if let Some(ms) = response.ms {
        tracing::debug!("Sanity query took {}ms", ms);
    }
    Ok(response.result)
}

/// Builds the `query` / `$name` pairs sent as URL parameters.
///
/// Parameter values are JSON-encoded, so strings arrive quoted.
pub fn query_pairs(query: &GroqQuery) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(query.params.len() + 1);
    pairs.push(("query".to_string(), query.query.clone()));
    for (name, value) in &query.params {
        pairs.push((format!("${}", name), value.to_string()));
    }
    pairs
}

/// HTTP-backed catalog source
pub struct SanityClient {
    client: Client,
    config: SanityConfig,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SanityConfig {
        &self.config
    }
}

#[async_trait]
impl CatalogSource for SanityClient {
    async fn fetch(&self, query: &GroqQuery) -> Result<Value, CatalogError> {
        let url = self.config.query_url();
        tracing::debug!("GET {} query={}", url, query.query);

        let mut request = self.client.get(&url).query(&query_pairs(query));
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_query_response(&body)
    }
}
