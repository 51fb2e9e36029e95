//! PostgREST-backed area store (Supabase REST endpoint).

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use rocagem_core::models::config::ImportConfig;
use rocagem_core::{AreaStore, ImportError, ServiceArea};

/// Talks to `{url}/rest/v1/{table}` with an API key.
pub struct SupabaseStore {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(url: &str, table: &str, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: table_endpoint(url, table),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &ImportConfig, api_key: impl Into<String>) -> Self {
        Self::new(&config.url, &config.table, api_key)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<Value>, ImportError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(request_error)?;

        response.json::<Vec<Value>>().await.map_err(request_error)
    }
}

impl AreaStore for SupabaseStore {
    async fn exists_by_name(&self, name: &str) -> Result<bool, ImportError> {
        let name_filter = format!("eq.{}", name);
        let request = self.client.get(&self.endpoint).query(&[
            ("select", "id"),
            ("name", name_filter.as_str()),
            ("limit", "1"),
        ]);

        let rows = self.send(request).await?;
        debug!("lookup {:?}: {} rows", name, rows.len());
        Ok(!rows.is_empty())
    }

    async fn insert(&self, area: &ServiceArea) -> Result<Option<String>, ImportError> {
        let request = self
            .client
            .post(&self.endpoint)
            .header("Prefer", "return=representation")
            .json(area);

        let rows = self.send(request).await?;
        Ok(rows.first().and_then(row_id))
    }
}

fn table_endpoint(url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", url.trim_end_matches('/'), table)
}

/// Id of a returned row, whether the store uses numeric or text keys.
fn row_id(row: &Value) -> Option<String> {
    match row.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn request_error(e: reqwest::Error) -> ImportError {
    ImportError::Request(e.to_string())
}
