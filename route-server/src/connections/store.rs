//! Shared, refreshable connection network.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::graph::Network;

use super::error::ConnectionsError;
use super::source::ConnectionSource;

/// Thread-safe handle to the current connection network.
///
/// Readers take a cheap [`Arc`] snapshot and search it without holding the
/// lock. A refresh builds a whole new network and swaps it in, so in-flight
/// searches keep the network they started with.
#[derive(Debug, Clone)]
pub struct NetworkStore {
    inner: Arc<RwLock<Arc<Network>>>,
    source: ConnectionSource,
}

impl NetworkStore {
    /// Load the initial network from a source.
    ///
    /// This will fail if the source cannot be read or holds invalid data.
    pub async fn load(source: ConnectionSource) -> Result<Self, ConnectionsError> {
        let network = Network::build(source.load().await?);
        info!(
            source = %source.describe(),
            locations = network.len(),
            connections = network.edge_count(),
            "loaded connection network"
        );

        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(network))),
            source,
        })
    }

    /// Current network.
    pub async fn snapshot(&self) -> Arc<Network> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    /// Rebuild the network from the source.
    ///
    /// On success, replaces the current network and returns its connection
    /// count. On failure, the existing network is preserved and the error
    /// is returned.
    pub async fn refresh(&self) -> Result<usize, ConnectionsError> {
        let network = Network::build(self.source.load().await?);
        let count = network.edge_count();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(network);

        Ok(count)
    }

    pub fn source(&self) -> &ConnectionSource {
        &self.source
    }
}
