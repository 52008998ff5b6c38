//! Application state for the web layer.

use crate::connections::NetworkStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Current connection network, refreshed in the background
    pub network: NetworkStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: NetworkStore) -> Self {
        Self { network }
    }
}
