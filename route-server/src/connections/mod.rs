//! Connection feed ingestion.
//!
//! Loads the priced connection list from a remote JSON endpoint or a local
//! file, validates it into domain types, and keeps the built
//! [`Network`](crate::graph::Network) current with background refreshes.

mod client;
mod error;
mod source;
mod store;
mod wire;

pub use client::{ConnectionsClient, ConnectionsClientConfig};
pub use error::ConnectionsError;
pub use source::ConnectionSource;
pub use store::NetworkStore;
pub use wire::{
    ConnectionDto, ConnectionsResponse, CoordinatePairDto, CoordinatesDto, parse_connections,
};
