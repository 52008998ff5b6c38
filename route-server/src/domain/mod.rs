//! Domain types for the route planner.
//!
//! This module contains the validated value types the planner works on.
//! All types enforce their invariants at construction time, so the graph
//! and search code can trust them without re-checking.

mod connection;
mod error;
mod location;

pub use connection::Connection;
pub use error::DomainError;
pub use location::{Coordinates, Location};
