//! HTTP client for the connections feed.

use tracing::debug;

use crate::domain::Connection;

use super::error::ConnectionsError;
use super::wire::parse_connections;

/// Configuration for the connections feed client.
#[derive(Debug, Clone)]
pub struct ConnectionsClientConfig {
    /// Full URL of the feed document
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ConnectionsClientConfig {
    /// Create a new config for the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 30,
        }
    }

    /// Set a custom request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Client that fetches the connection list over HTTP.
#[derive(Debug, Clone)]
pub struct ConnectionsClient {
    http: reqwest::Client,
    url: String,
}

impl ConnectionsClient {
    /// Create a new feed client.
    pub fn new(config: ConnectionsClientConfig) -> Result<Self, ConnectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The feed URL this client reads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and validate every connection in the feed.
    pub async fn fetch_all(&self) -> Result<Vec<Connection>, ConnectionsError> {
        debug!(url = %self.url, "fetching connections");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ConnectionsError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConnectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_connections(&body)
    }
}
