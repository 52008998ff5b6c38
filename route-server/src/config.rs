//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::connections::{
    ConnectionSource, ConnectionsClient, ConnectionsClientConfig, ConnectionsError,
};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_REFRESH_SECS: u64 = 60 * 60;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Error building the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Neither `CONNECTIONS_FILE` nor `CONNECTIONS_URL` is set
    #[error("no connection source: set CONNECTIONS_FILE or CONNECTIONS_URL")]
    MissingSource,

    /// A variable is set but cannot be parsed
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Where the server loads connections from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Url(String),
    File(PathBuf),
}

/// Configuration for the route server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Connection feed location.
    pub source: SourceConfig,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// How often to reload connections. `None` disables reloading.
    pub refresh_interval: Option<Duration>,

    /// Timeout for feed requests (seconds).
    pub http_timeout_secs: u64,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    ///
    /// - `CONNECTIONS_FILE` / `CONNECTIONS_URL`: feed location (file wins)
    /// - `BIND_ADDR`: listen address, default `127.0.0.1:3000`
    /// - `REFRESH_INTERVAL_SECS`: reload period, default 3600, `0` disables
    /// - `HTTP_TIMEOUT_SECS`: feed request timeout, default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let source = match (get("CONNECTIONS_FILE"), get("CONNECTIONS_URL")) {
            (Some(path), _) => SourceConfig::File(PathBuf::from(path)),
            (None, Some(url)) => SourceConfig::Url(url),
            (None, None) => return Err(ConfigError::MissingSource),
        };

        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), || {
            DEFAULT_BIND_ADDR.parse().ok()
        })?;
        let refresh_secs: u64 = parse_or(
            "REFRESH_INTERVAL_SECS",
            get("REFRESH_INTERVAL_SECS"),
            || Some(DEFAULT_REFRESH_SECS),
        )?;
        let http_timeout_secs = parse_or("HTTP_TIMEOUT_SECS", get("HTTP_TIMEOUT_SECS"), || {
            Some(DEFAULT_HTTP_TIMEOUT_SECS)
        })?;

        Ok(Self {
            source,
            bind_addr,
            refresh_interval: (refresh_secs > 0).then(|| Duration::from_secs(refresh_secs)),
            http_timeout_secs,
        })
    }

    /// Build the connection source this configuration points at.
    pub fn connection_source(&self) -> Result<ConnectionSource, ConnectionsError> {
        match &self.source {
            SourceConfig::File(path) => Ok(ConnectionSource::File(path.clone())),
            SourceConfig::Url(url) => {
                let config =
                    ConnectionsClientConfig::new(url).with_timeout_secs(self.http_timeout_secs);
                Ok(ConnectionSource::Remote(ConnectionsClient::new(config)?))
            }
        }
    }
}

fn parse_or<T, D>(key: &'static str, raw: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    D: FnOnce() -> Option<T>,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => default().ok_or_else(|| ConfigError::InvalidValue {
            key,
            value: String::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[("CONNECTIONS_URL", "http://feed")]).unwrap();

        assert_eq!(config.source, SourceConfig::Url("http://feed".into()));
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.refresh_interval, Some(Duration::from_secs(3600)));
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    fn file_wins_over_url() {
        let config = config(&[
            ("CONNECTIONS_URL", "http://feed"),
            ("CONNECTIONS_FILE", "/data/connections.json"),
        ])
        .unwrap();

        assert_eq!(
            config.source,
            SourceConfig::File(PathBuf::from("/data/connections.json"))
        );
    }

    #[test]
    fn missing_source() {
        assert_eq!(config(&[]).unwrap_err(), ConfigError::MissingSource);
        assert_eq!(
            config(&[("CONNECTIONS_URL", "  ")]).unwrap_err(),
            ConfigError::MissingSource
        );
    }

    #[test]
    fn custom_values() {
        let config = config(&[
            ("CONNECTIONS_FILE", "c.json"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("REFRESH_INTERVAL_SECS", "0"),
            ("HTTP_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.refresh_interval, None);
        assert_eq!(config.http_timeout_secs, 5);
    }

    #[test]
    fn invalid_number() {
        let err = config(&[
            ("CONNECTIONS_FILE", "c.json"),
            ("REFRESH_INTERVAL_SECS", "hourly"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "REFRESH_INTERVAL_SECS",
                value: "hourly".into()
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid value for REFRESH_INTERVAL_SECS: \"hourly\""
        );
    }

    #[test]
    fn invalid_bind_addr() {
        let err = config(&[("CONNECTIONS_FILE", "c.json"), ("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "BIND_ADDR", .. }));
    }

    #[test]
    fn file_source_needs_no_client() {
        let config = config(&[("CONNECTIONS_FILE", "c.json")]).unwrap();
        assert!(matches!(
            config.connection_source().unwrap(),
            ConnectionSource::File(_)
        ));
    }
}
