//! Resolved routes.

use std::cmp::Ordering;

use crate::domain::{Connection, Location};

/// A complete path from a start location to a destination.
///
/// Routes are only produced by the planner. They always hold at least one
/// location, and exactly one more location than connections: the start,
/// then the `to` location of each connection in path order.
///
/// `PartialEq` is structural. Use [`Route::price_cmp`] to rank routes by
/// price, where two different paths of equal price rank the same.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    locations: Vec<Location>,
    connections: Vec<Connection>,
    total_price: f64,
}

impl Route {
    /// Build a route that starts at `start` and follows `connections`.
    ///
    /// The connections must form a path: each one leaves from where the
    /// previous one arrived, the first leaving from `start`.
    pub(crate) fn from_path(start: Location, connections: Vec<Connection>) -> Self {
        let mut locations = Vec::with_capacity(connections.len() + 1);
        locations.push(start);
        locations.extend(connections.iter().map(|c| c.to().clone()));

        let total_price = connections.iter().fold(0.0, |sum, c| sum + c.price());

        Self {
            locations,
            connections,
            total_price,
        }
    }

    /// Where the route begins.
    pub fn start_location(&self) -> &Location {
        &self.locations[0]
    }

    /// Where the route ends. Equal to the start for a zero-edge route.
    pub fn destination_location(&self) -> &Location {
        &self.locations[self.locations.len() - 1]
    }

    /// Locations strictly between start and destination, in path order.
    pub fn pass_through_locations(&self) -> &[Location] {
        match self.locations.len() {
            0..=2 => &[],
            n => &self.locations[1..n - 1],
        }
    }

    /// Number of intermediate stops.
    pub fn stop_count(&self) -> usize {
        self.pass_through_locations().len()
    }

    /// Every location on the route, start first.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The connections traversed, in order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Sum of the prices of all traversed connections.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Compare two routes by total price only.
    pub fn price_cmp(&self, other: &Self) -> Ordering {
        self.total_price.total_cmp(&other.total_price)
    }
}
