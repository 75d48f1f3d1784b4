//! Main zone catalog client implementation.

use crate::api::ZonesApi;
use cczone_core::{Result, ZoneCheckError};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The Clever Cloud API base URL
const DEFAULT_BASE_URL: &str = "https://api.clever-cloud.com";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the platform's public product API
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
    timeout: Duration,
}

impl CatalogClient {
    /// Create a new client against the public API using default settings
    pub fn new() -> Result<Self> {
        CatalogClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::new()
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Access zone catalog endpoints
    #[must_use]
    pub fn zones(&self) -> ZonesApi<'_> {
        ZonesApi::new(self)
    }

    /// Perform a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        self.handle_response(response).await
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url.trim_end_matches('/'), path)
    }

    fn map_transport_error(&self, err: &reqwest::Error) -> ZoneCheckError {
        if err.is_timeout() {
            ZoneCheckError::Timeout(self.inner.timeout.as_secs())
        } else {
            ZoneCheckError::Http(err.to_string())
        }
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| self.map_transport_error(&e))?;
            serde_json::from_str(&body).map_err(ZoneCheckError::Json)
        } else {
            Self::handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a `ZoneCheckError`
    async fn handle_error<T>(status: u16, response: reqwest::Response) -> Result<T> {
        let resource = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();

        // The API reports failures as {"id": .., "message": "..", "type": "error"}
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);

        match status {
            404 => Err(ZoneCheckError::NotFound { resource }),
            429 => {
                warn!("Rate limited by the platform API");
                Err(ZoneCheckError::Api {
                    code: status,
                    message,
                })
            }
            _ => Err(ZoneCheckError::Api {
                code: status,
                message,
            }),
        }
    }
}

/// Builder for configuring a [`CatalogClient`]
pub struct CatalogClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for CatalogClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("cczone/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<CatalogClient> {
        reqwest::Url::parse(&self.base_url)
            .map_err(|e| ZoneCheckError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| ZoneCheckError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(CatalogClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url,
                timeout: self.timeout,
            }),
        })
    }
}
