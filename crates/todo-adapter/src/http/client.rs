/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use std::time::Duration;

use crate::auth::AccessToken;
use crate::http::{Result, TodoError};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Total request timeout. `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the task API
#[derive(Debug, Clone)]
pub struct TodoClient {
    http_client: Client,
    base_url: String,
}

impl TodoClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url)
    }

    /// Create a new client with custom configuration.
    ///
    /// The base URL is only checked when a request is built, so a bad value
    /// surfaces as a client-side error on the first call.
    pub fn with_config(config: ClientConfig, base_url: &str) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| TodoError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build full URL for an API endpoint
    pub(crate) fn api_url(&self, endpoint: &str) -> Result<Url> {
        if self.base_url.is_empty() {
            return Err(TodoError::Config("base URL is empty".to_string()));
        }
        Ok(Url::parse(&format!("{}{}", self.base_url, endpoint))?)
    }

    /// Build request builder carrying the bearer token
    pub(crate) fn authed_request(
        &self,
        method: Method,
        endpoint: &str,
        token: &AccessToken,
    ) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        Ok(self
            .http_client
            .request(method, url)
            .bearer_auth(token.as_str()))
    }
}
