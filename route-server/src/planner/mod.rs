//! Cheapest-route planner.
//!
//! This module answers: "what is the cheapest way to get from this
//! location to that one?" over a [`Network`](crate::graph::Network) of
//! priced, directed connections.
//!
//! The search is a uniform-cost (Dijkstra) expansion driven by a binary
//! heap keyed on cumulative price. It is synchronous and pure: the network
//! is only read, so any number of searches may share one.

mod rank;
mod route;
mod search;
mod selection;

pub use rank::rank_routes;
pub use route::Route;
pub use search::{find_cheapest_route, find_cheapest_route_by_id};
pub use selection::RouteSelection;
