use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;

use crate::{
    config::AppConfig,
    error::{Error, Result},
};

use super::{QueryResult, QueryService, RpcCall, Selection, SupabaseError};

/// PostgREST client for a Supabase project.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.supabase_key)
            .map_err(|_| Error::ConfigError("SUPABASE_ANON_KEY is not a valid header".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.supabase_key))
            .map_err(|_| Error::ConfigError("SUPABASE_ANON_KEY is not a valid header".into()))?;

        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", config.supabase_url.trim_end_matches('/')),
        })
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> QueryResult<Vec<Value>> {
        let response = request.send().await.map_err(SupabaseError::transport)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SupabaseError::from_response(status, &body));
        }

        let body: Value = response.json().await.map_err(SupabaseError::transport)?;

        // Procedures returning a single record answer with an object.
        match body {
            Value::Array(rows) => Ok(rows),
            Value::Null => Ok(Vec::new()),
            row => Ok(vec![row]),
        }
    }
}

#[async_trait]
impl QueryService for SupabaseClient {
    async fn select(&self, selection: &Selection) -> QueryResult<Vec<Value>> {
        tracing::debug!(relation = %selection.relation, "supabase select");

        let request = self
            .http
            .get(format!("{}/{}", self.rest_url, selection.relation))
            .query(&selection.to_query_pairs());

        self.execute(request).await
    }

    async fn rpc(&self, call: &RpcCall) -> QueryResult<Vec<Value>> {
        tracing::debug!(function = %call.function, "supabase rpc");

        let request = self
            .http
            .post(format!("{}/rpc/{}", self.rest_url, call.function))
            .json(&call.args);

        self.execute(request).await
    }
}
