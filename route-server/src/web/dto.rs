//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Connection, Location};
use crate::planner::Route;

/// Request to search locations by title prefix.
#[derive(Debug, Deserialize)]
pub struct LocationSearchRequest {
    /// Title prefix (case-sensitive)
    pub q: String,

    /// Title of a location to leave out, e.g. the other chosen endpoint
    pub exclude: Option<String>,

    /// Maximum results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// Location search response.
#[derive(Debug, Serialize, Deserialize)]
pub struct LocationSearchResponse {
    pub locations: Vec<LocationResult>,
}

/// A location in API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Location> for LocationResult {
    fn from(location: &Location) -> Self {
        Self {
            title: location.title().to_string(),
            latitude: location.coordinates().latitude(),
            longitude: location.coordinates().longitude(),
        }
    }
}

/// Request for the cheapest route between two titled locations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
}

/// A traversed connection in a route response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionResult {
    pub from: String,
    pub to: String,
    pub price: f64,
}

impl From<&Connection> for ConnectionResult {
    fn from(connection: &Connection) -> Self {
        Self {
            from: connection.from().title().to_string(),
            to: connection.to().title().to_string(),
            price: connection.price(),
        }
    }
}

/// The cheapest route found.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    pub start: LocationResult,
    pub destination: LocationResult,

    /// Locations strictly between start and destination, in order
    pub pass_through: Vec<LocationResult>,

    /// Number of intermediate stops
    pub stops: usize,

    pub total_price: f64,
    pub connections: Vec<ConnectionResult>,
}

impl From<&Route> for RouteResponse {
    fn from(route: &Route) -> Self {
        Self {
            start: route.start_location().into(),
            destination: route.destination_location().into(),
            pass_through: route
                .pass_through_locations()
                .iter()
                .map(LocationResult::from)
                .collect(),
            stops: route.stop_count(),
            total_price: route.total_price(),
            connections: route
                .connections()
                .iter()
                .map(ConnectionResult::from)
                .collect(),
        }
    }
}

/// Error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
