//! Hosted catalog backend speaking PostgREST (as exposed by Supabase)
//!
//! Queries become `GET {url}/rest/v1/{table}?gender=eq.Female&...` with the
//! project's anon key in both the `apikey` and bearer headers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

use super::{Catalog, CatalogQuery, ConnectorRecord};
use crate::config::RemoteCatalogConfig;

/// PostgREST-backed catalog
pub struct RestCatalog {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl RestCatalog {
    /// Create a new backend, reading the API key from the configured env var
    pub fn new(config: &RemoteCatalogConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).with_context(|| {
            format!(
                "Remote catalog requires {} environment variable to be set",
                config.api_key_env
            )
        })?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/rest/v1/{}",
                config.url.trim_end_matches('/'),
                config.table
            ),
            api_key,
        })
    }

    async fn fetch(&self, params: &[(&str, String)]) -> Result<Vec<ConnectorRecord>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(params)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to catalog")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Catalog API error: {} - {}", status, body);
            return Err(anyhow::anyhow!("Catalog API error: {} - {}", status, body));
        }

        response
            .json()
            .await
            .context("Failed to parse catalog response")
    }
}

#[async_trait]
impl Catalog for RestCatalog {
    async fn query(&self, query: &CatalogQuery) -> Result<Vec<ConnectorRecord>> {
        debug!("Catalog query {:?} via {}", query, self.endpoint);
        self.fetch(&query.to_rest_params()).await
    }

    async fn get(&self, id: i64) -> Result<Option<ConnectorRecord>> {
        let params = [
            ("select", "*".to_string()),
            ("id", format!("eq.{id}")),
            ("limit", "1".to_string()),
        ];
        Ok(self.fetch(&params).await?.into_iter().next())
    }

    fn name(&self) -> &'static str {
        "rest"
    }
}
