//! HTTP client for the gym-management backend
//!
//! Verb mapping: GET for reads/lists, POST for creation and for
//! state-transition actions modeled as sub-resources, PATCH for partial
//! updates, DELETE for deactivation/removal. PUT exists only as the legacy
//! product-update fallback.
//!
//! Every request carries `Authorization: Bearer <token>` sourced from the
//! injected [`TokenProvider`]; this layer does not manage token lifecycle.
//! A 401 maps to [`ApiError::Unauthorized`] and the caller performs the
//! global logout.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde_json::Value;

use gymdesk_common::BackendConfig;

use crate::error::ApiError;
use crate::normalize::paginated_envelope;

const USER_AGENT: &str = "Gymdesk/0.1.0 (admin console)";

/// Page size used by the aggregator
const PAGE_LIMIT: u64 = 100;

/// Safety cap on the sequential page loop. The backend-declared
/// `totalPages` is trusted below this; a backend that keeps reporting more
/// pages than it serves stops here with a warning instead of looping
/// forever.
pub const MAX_PAGES: u64 = 10_000;

/// Read-only session token accessor, substitutable in tests.
///
/// Token lifecycle (login, refresh, logout) belongs to the caller.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Fixed token, for tests and scripted use
pub struct StaticToken(pub Option<String>);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Flat query-string record; `None` values are omitted entirely rather than
/// serialized as a literal placeholder.
pub type QueryParams = Vec<(String, Option<String>)>;

/// Gymdesk backend HTTP client
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(config: &BackendConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Client with default timeout, for tests against a local mock backend
    pub fn with_base_url(base_url: &str, tokens: Arc<dyn TokenProvider>) -> Result<Self, ApiError> {
        let config = BackendConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(30),
        };
        Self::new(&config, tokens)
    }

    pub async fn get(&self, path: &str, params: &[(String, Option<String>)]) -> Result<Value, ApiError> {
        self.execute(Method::GET, path, params, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.execute(Method::POST, path, &[], Some(body)).await
    }

    /// POST with no body, for state-transition sub-resources
    /// (e.g. `POST /memberships/{id}/freeze`)
    pub async fn post_action(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::POST, path, &[], None).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.execute(Method::PATCH, path, &[], Some(body)).await
    }

    /// Legacy alternative to PATCH for one product-update path
    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.execute(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::DELETE, path, &[], None).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &[(String, Option<String>)],
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http_client.request(method.clone(), &url);

        let query: Vec<(&str, &str)> = params
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key.as_str(), v)))
            .collect();
        if !query.is_empty() {
            request = request.query(&query);
        }

        if let Some(token) = self.tokens.token() {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(method = %method, url = %url, "Requesting backend");

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), url = %url, "Backend returned error");
            return Err(ApiError::Status(status.as_u16(), error_text));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // DELETE and transition endpoints may answer 204 with no body
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fetch every page of a list endpoint, strictly sequentially.
    ///
    /// Page N+1 is not requested until page N's response is processed, so
    /// results preserve page-then-within-page order as returned by the
    /// server. `total_pages` is re-read from each response; termination
    /// relies on the server-declared value plus the [`MAX_PAGES`] cap.
    pub async fn get_all_pages(
        &self,
        path: &str,
        params: &[(String, Option<String>)],
    ) -> Result<Vec<Value>, ApiError> {
        self.get_all_pages_capped(path, params, MAX_PAGES).await
    }

    /// [`Self::get_all_pages`] with an explicit page cap.
    pub async fn get_all_pages_capped(
        &self,
        path: &str,
        params: &[(String, Option<String>)],
        max_pages: u64,
    ) -> Result<Vec<Value>, ApiError> {
        let mut results = Vec::new();
        let mut page: u64 = 1;

        loop {
            let mut query = params.to_vec();
            query.push(("page".to_string(), Some(page.to_string())));
            query.push(("limit".to_string(), Some(PAGE_LIMIT.to_string())));

            let payload = self.get(path, &query).await?;
            let envelope = paginated_envelope(&payload);
            results.extend(envelope.data);

            let total_pages = envelope.total_pages.max(1);
            page += 1;

            if page > total_pages {
                break;
            }
            if page > max_pages {
                tracing::warn!(
                    path,
                    total_pages,
                    "Pagination cap reached, returning partial results"
                );
                break;
            }
        }

        tracing::debug!(path, items = results.len(), "Aggregated paginated list");

        Ok(results)
    }
}
