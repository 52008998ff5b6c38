//! Start/destination selection with on-demand recomputation.

use std::sync::Arc;

use crate::domain::Location;
use crate::graph::Network;

use super::{Route, find_cheapest_route};

/// The pair of endpoints a user is picking, plus the route between them.
///
/// Every change to either endpoint re-runs the search, so `route()` always
/// reflects the current selection. Unsetting an endpoint clears the route.
#[derive(Debug, Clone)]
pub struct RouteSelection {
    network: Arc<Network>,
    start: Option<Location>,
    destination: Option<Location>,
    route: Option<Route>,
}

impl RouteSelection {
    /// Create an empty selection over a network.
    pub fn new(network: Arc<Network>) -> Self {
        Self {
            network,
            start: None,
            destination: None,
            route: None,
        }
    }

    pub fn start(&self) -> Option<&Location> {
        self.start.as_ref()
    }

    pub fn destination(&self) -> Option<&Location> {
        self.destination.as_ref()
    }

    /// The cheapest route for the current endpoints, if both are set and
    /// connected.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Set or clear the start location and recompute.
    pub fn set_start(&mut self, start: Option<Location>) -> Option<&Route> {
        self.start = start;
        self.recompute();
        self.route.as_ref()
    }

    /// Set or clear the destination location and recompute.
    pub fn set_destination(&mut self, destination: Option<Location>) -> Option<&Route> {
        self.destination = destination;
        self.recompute();
        self.route.as_ref()
    }

    /// Swap in a rebuilt network, keeping the endpoints.
    pub fn rebind(&mut self, network: Arc<Network>) -> Option<&Route> {
        self.network = network;
        self.recompute();
        self.route.as_ref()
    }

    /// Suggestions for the start field.
    ///
    /// Empty once a start is chosen; never offers the chosen destination.
    pub fn start_candidates(&self, prefix: &str) -> Vec<&Location> {
        if self.start.is_some() {
            return Vec::new();
        }
        self.network.search(prefix, self.destination.as_ref())
    }

    /// Suggestions for the destination field.
    ///
    /// Empty once a destination is chosen; never offers the chosen start.
    pub fn destination_candidates(&self, prefix: &str) -> Vec<&Location> {
        if self.destination.is_some() {
            return Vec::new();
        }
        self.network.search(prefix, self.start.as_ref())
    }

    fn recompute(&mut self) {
        self.route = match (&self.start, &self.destination) {
            (Some(start), Some(destination)) => {
                find_cheapest_route(start, destination, &self.network)
            }
            _ => None,
        };
    }
}
