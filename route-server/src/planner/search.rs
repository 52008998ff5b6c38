//! Uniform-cost route search.
//!
//! Finds the cheapest path between two locations. Candidates are kept in a
//! binary heap ordered by cumulative price; the first time a location is
//! popped its price is final, since no price is negative. That location is
//! then settled and never expanded again.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::Location;
use crate::graph::{EdgeId, LocationId, Network};

use super::Route;

/// A partial path on the frontier, ending at `location`.
///
/// The connections walked so far are not stored here; they are recovered
/// from the predecessor edge recorded when each location is settled.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    price: f64,
    /// Insertion order, so equal-price candidates pop deterministically.
    sequence: u64,
    location: LocationId,
    via: Option<EdgeId>,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we want the cheapest first.
        other
            .price
            .total_cmp(&self.price)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Per-location bookkeeping for one search call.
struct Settled {
    settled: Vec<bool>,
    via: Vec<Option<EdgeId>>,
}

impl Settled {
    fn new(len: usize) -> Self {
        Self {
            settled: vec![false; len],
            via: vec![None; len],
        }
    }

    fn contains(&self, location: LocationId) -> bool {
        self.settled[location.index()]
    }

    fn settle(&mut self, candidate: &Candidate) {
        self.settled[candidate.location.index()] = true;
        self.via[candidate.location.index()] = candidate.via;
    }
}

/// Find the cheapest route from `start` to `destination`.
///
/// Returns `None` when no path exists, including when either location is
/// not part of the network. A location is always reachable from itself:
/// when `start == destination` the result is a zero-price route with no
/// connections, whether or not the location is in the network.
///
/// Prices are assumed finite and non-negative, which
/// [`Connection::new`](crate::domain::Connection::new) guarantees.
///
/// # Examples
///
/// ```
/// use route_server::domain::{Connection, Coordinates, Location};
/// use route_server::graph::Network;
/// use route_server::planner::find_cheapest_route;
///
/// let at = |title: &str| Location::new(title, Coordinates::new(0.0, 0.0).unwrap()).unwrap();
/// let network = Network::build(vec![
///     Connection::new(at("First"), at("Second"), 2.0).unwrap(),
///     Connection::new(at("First"), at("Third"), 10.0).unwrap(),
///     Connection::new(at("Second"), at("Third"), 5.0).unwrap(),
/// ]);
///
/// let route = find_cheapest_route(&at("First"), &at("Third"), &network).unwrap();
/// assert_eq!(route.total_price(), 7.0);
/// assert_eq!(route.pass_through_locations(), &[at("Second")]);
/// ```
pub fn find_cheapest_route(
    start: &Location,
    destination: &Location,
    network: &Network,
) -> Option<Route> {
    if start == destination {
        return Some(Route::from_path(start.clone(), Vec::new()));
    }

    let start = network.id_of(start)?;
    let destination = network.id_of(destination)?;
    find_cheapest_route_by_id(start, destination, network)
}

/// Find the cheapest route between two interned locations.
///
/// Returns `None` when no path exists or when either id does not belong to
/// `network`.
pub fn find_cheapest_route_by_id(
    start: LocationId,
    destination: LocationId,
    network: &Network,
) -> Option<Route> {
    let start_location = network.location(start)?;
    network.location(destination)?;

    let mut settled = Settled::new(network.len());
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0;
    let mut settled_count = 0usize;

    frontier.push(Candidate {
        price: 0.0,
        sequence,
        location: start,
        via: None,
    });

    while let Some(candidate) = frontier.pop() {
        if settled.contains(candidate.location) {
            continue;
        }

        settled.settle(&candidate);
        settled_count += 1;
        trace!(
            location = candidate.location.index(),
            price = candidate.price,
            "settled location"
        );

        if candidate.location == destination {
            let route = rebuild(start_location, destination, &settled, network);
            debug!(
                start = %route.start_location(),
                destination = %route.destination_location(),
                price = route.total_price(),
                settled = settled_count,
                "found cheapest route"
            );
            return Some(route);
        }

        for &edge in network.outbound(candidate.location) {
            let next = network.target(edge);
            if settled.contains(next) {
                continue;
            }

            sequence += 1;
            frontier.push(Candidate {
                price: candidate.price + network.connection(edge).price(),
                sequence,
                location: next,
                via: Some(edge),
            });
        }
    }

    debug!(
        start = %start_location,
        settled = settled_count,
        "no route to destination"
    );
    None
}

/// Walk predecessor edges back from the destination to rebuild the path.
fn rebuild(
    start: &Location,
    destination: LocationId,
    settled: &Settled,
    network: &Network,
) -> Route {
    let mut connections = Vec::new();
    let mut current = destination;

    // The start is settled with no predecessor, which ends the walk.
    while let Some(edge) = settled.via[current.index()] {
        connections.push(network.connection(edge).clone());
        current = network.source(edge);
    }

    connections.reverse();
    Route::from_path(start.clone(), connections)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
