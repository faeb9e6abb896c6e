//! vRA HTTP client for API interactions

use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{Result, VraError};

/// Connection settings for a [`VraClient`]
///
/// Read-only for the lifetime of the client; every call made through the
/// client uses the same host and token.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// vRA appliance host name (e.g. `vra.example.com`)
    pub host: String,
    /// Bearer token; `None` for unauthenticated calls such as token issuance
    pub token: Option<String>,
    /// Accept self-signed or otherwise invalid TLS certificates
    pub accept_invalid_certs: bool,
    /// Total request timeout; no timeout when unset
    pub timeout: Option<Duration>,
    /// Custom base URL override (for testing with mock servers)
    pub base_url: Option<String>,
}

impl ClientConfig {
    /// Create a config for the given host without a token
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// vRA API client
pub struct VraClient {
    client: Client,
    token: Option<String>,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl VraClient {
    /// Create a new authenticated client with default connection settings
    pub fn new(token: String, host: String) -> Self {
        let config = ClientConfig::new(host).with_token(token);
        let client = build_http_client(&config).unwrap_or_else(|_| Client::new());

        Self {
            client,
            token: config.token,
            host: config.host,
            base_url_override: None,
        }
    }

    /// Create a client from an explicit configuration
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let client = build_http_client(&config)?;

        Ok(Self {
            client,
            token: config.token,
            host: config.host,
            base_url_override: config.base_url,
        })
    }

    /// Create a client with custom base URL (for testing with mock servers)
    pub fn with_base_url(token: Option<String>, host: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            token,
            host,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.trim_end_matches('/').to_string();
        }
        let host = self
            .host
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        format!("https://{}", host)
    }

    /// Join an API path onto the base URL
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Get the host this client talks to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header("cache-control", "no-cache")
            .header("content-type", "application/json");
        match &self.token {
            Some(token) => builder.header("authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a HEAD request builder with an explicit bearer token
    pub(crate) fn head_with_token(&self, url: &str, token: &str) -> RequestBuilder {
        self.client
            .head(url)
            .header("authorization", format!("Bearer {}", token))
            .header("content-type", "application/json")
    }

    /// Parse an API response expecting `200 OK`
    ///
    /// Any other status becomes [`VraError::Api`] carrying the raw body.
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status().as_u16();
        if status != 200 {
            let body = read_body(response).await;
            debug!("Failed to fetch {} (status {})", error_context, status);
            return Err(VraError::Api { status, body });
        }
        decode_body(response).await
    }
}

/// Build the underlying reqwest client from connection settings
fn build_http_client(config: &ClientConfig) -> reqwest::Result<Client> {
    let mut builder = Client::builder()
        // Connection pool settings - reuse connections
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(10))
        .danger_accept_invalid_certs(config.accept_invalid_certs);

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}

/// Decode a response body as JSON
///
/// Failing to read the body is a transport error; a body that is not the
/// expected JSON is [`VraError::Json`].
pub(crate) async fn decode_body<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// Read a response body as text, tolerating unreadable bodies
pub(crate) async fn read_body(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

#[cfg(test)]
impl VraClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            Some("test-token".to_string()),
            "mock.vra.local".to_string(),
            base_url.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url() {
        let client = VraClient::new("token".to_string(), "vra.example.com".to_string());
        assert_eq!(client.base_url(), "https://vra.example.com");
    }

    #[test]
    fn test_base_url_strips_scheme_and_slash() {
        let client = VraClient::new("token".to_string(), "https://vra.example.com/".to_string());
        assert_eq!(client.base_url(), "https://vra.example.com");
    }

    #[test]
    fn test_url_joins_path() {
        let client = VraClient::new("token".to_string(), "vra.example.com".to_string());
        assert_eq!(
            client.url("/identity/api/tokens"),
            "https://vra.example.com/identity/api/tokens"
        );
    }

    #[test]
    fn test_client_creation() {
        let client = VraClient::new("my-token".to_string(), "vra.example.com".to_string());
        assert_eq!(client.host(), "vra.example.com");
        assert_eq!(client.token(), Some("my-token"));
    }

    #[test]
    fn test_from_config_without_token() {
        let client = VraClient::from_config(ClientConfig {
            host: "vra.example.com".to_string(),
            accept_invalid_certs: true,
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        })
        .unwrap();
        assert!(client.token().is_none());
    }

    #[test]
    fn test_base_url_override() {
        let client = VraClient::test_client("http://127.0.0.1:9999/");
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[tokio::test]
    async fn test_standard_headers_are_sent() {
        let mock_server = MockServer::start().await;
        let client = VraClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("cache-control", "no-cache"))
            .and(header("content-type", "application/json"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = client.get(&client.url("/ping")).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_parse_api_response_malformed_body_is_json_error() {
        let mock_server = MockServer::start().await;
        let client = VraClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/garbled"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let response = client.get(&client.url("/garbled")).send().await.unwrap();
        let result: Result<serde_json::Value> =
            client.parse_api_response(response, "garbled thing").await;

        assert!(matches!(result, Err(VraError::Json(_))));
    }

    #[tokio::test]
    async fn test_parse_api_response_error_keeps_body() {
        let mock_server = MockServer::start().await;
        let client = VraClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let response = client.get(&client.url("/broken")).send().await.unwrap();
        let result: Result<serde_json::Value> =
            client.parse_api_response(response, "broken thing").await;

        match result.unwrap_err() {
            VraError::Api { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("Expected VraError::Api, got {:?}", other),
        }
    }
}
