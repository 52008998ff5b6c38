//! Where connections come from.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::Connection;

use super::client::ConnectionsClient;
use super::error::ConnectionsError;
use super::wire::parse_connections;

/// A place to load the connection list from.
#[derive(Debug, Clone)]
pub enum ConnectionSource {
    /// Remote feed fetched over HTTP.
    Remote(ConnectionsClient),
    /// Local JSON file in the feed's wire format.
    File(PathBuf),
    /// Fixed in-memory list.
    Fixed(Arc<[Connection]>),
}

impl ConnectionSource {
    /// Load and validate the full connection list.
    pub async fn load(&self) -> Result<Vec<Connection>, ConnectionsError> {
        match self {
            ConnectionSource::Remote(client) => client.fetch_all().await,
            ConnectionSource::File(path) => {
                let body = tokio::fs::read_to_string(path).await.map_err(|source| {
                    ConnectionsError::Io {
                        path: path.clone(),
                        source,
                    }
                })?;
                parse_connections(&body)
            }
            ConnectionSource::Fixed(connections) => Ok(connections.to_vec()),
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            ConnectionSource::Remote(client) => client.url().to_string(),
            ConnectionSource::File(path) => path.display().to_string(),
            ConnectionSource::Fixed(connections) => {
                format!("in-memory ({} connections)", connections.len())
            }
        }
    }
}

impl From<Vec<Connection>> for ConnectionSource {
    fn from(connections: Vec<Connection>) -> Self {
        ConnectionSource::Fixed(connections.into())
    }
}
