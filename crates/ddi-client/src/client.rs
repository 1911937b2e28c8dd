//! Main Universal DDI API client implementation.

use crate::api::{AuthZoneApi, RecordApi, ViewApi};
use ddi_core::{DdiError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The Infoblox Cloud Services Portal base URL
pub const DEFAULT_BASE_URL: &str = "https://csp.infoblox.com";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Main Universal DDI API client
#[derive(Clone)]
pub struct DdiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: String,
    base_url: String,
}

impl DdiClient {
    /// Create a new client with the given API key using default settings
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        DdiClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> DdiClientBuilder {
        DdiClientBuilder::new(api_key)
    }

    /// Access DNS view endpoints
    #[must_use]
    pub fn views(&self) -> ViewApi<'_> {
        ViewApi::new(self)
    }

    /// Access authoritative zone endpoints
    #[must_use]
    pub fn zones(&self) -> AuthZoneApi<'_> {
        AuthZoneApi::new(self)
    }

    /// Access resource record endpoints
    #[must_use]
    pub fn records(&self) -> RecordApi<'_> {
        RecordApi::new(self)
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path, params);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|e| DdiError::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Perform a POST request with JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path, &[]);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(body)
            .send()
            .await
            .map_err(|e| DdiError::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Perform a DELETE request
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path, &[]);
        debug!(url = %url, "DELETE request");

        let response = self
            .inner
            .http
            .delete(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|e| DdiError::Http(e.to_string()))?;

        self.handle_empty_response(response).await
    }

    /// CSP token authorization header value
    fn auth_header(&self) -> String {
        format!("Token {}", self.inner.api_key)
    }

    /// Build a URL with query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);

        let mut separator = '?';
        for (key, value) in params {
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            separator = '&';
        }

        url
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
                .map_err(|e| DdiError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(DdiError::Json)
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Handle an API response that returns no body
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a DdiError
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // The CSP wraps errors as {"error": [{"message": "..."}]} or {"message": "..."}
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error")?.get(0)?.get("message"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or(body);

        match status {
            401 | 403 => Err(DdiError::Unauthorized),
            404 => Err(DdiError::NotFound { resource: message }),
            429 => {
                warn!("rate limited by the CSP");
                Err(DdiError::RateLimited { retry_after: None })
            }
            _ => Err(DdiError::Api {
                code: status,
                message,
            }),
        }
    }
}

/// Builder for configuring a [`DdiClient`]
pub struct DdiClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl DdiClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("ddi-acme/{}", env!("CARGO_PKG_VERSION")),
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
    pub fn timeout(mut self, timeout: Duration) -> Self {
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
    #[must_use]
    pub fn build(self) -> DdiClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        DdiClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                base_url: self.base_url,
            }),
        }
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_encodes_query() {
        let client = DdiClient::builder("key").base_url("http://host").build();
        let url = client.build_url(
            "/api/ddi/v1/dns/view",
            &[("_filter", "name==\"default\""), ("_inherit", "full")],
        );
        assert_eq!(
            url,
            "http://host/api/ddi/v1/dns/view?_filter=name%3D%3D%22default%22&_inherit=full"
        );
    }

    #[test]
    fn test_build_url_without_params() {
        let client = DdiClient::builder("key").base_url("http://host").build();
        let url = client.build_url("/api/ddi/v1/dns/record/abc", &[]);
        assert_eq!(url, "http://host/api/ddi/v1/dns/record/abc");
    }
}
