//! Directed, priced connections between locations.

use super::{DomainError, Location};

/// A directed edge from one location to another with a travel price.
///
/// A connection from A to B says nothing about B to A. Parallel
/// connections between the same pair and self-loops are both legal.
///
/// Prices are checked here, once, when data enters the domain: the search
/// relies on every price being finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    from: Location,
    to: Location,
    price: f64,
}

impl Connection {
    /// Create a connection, rejecting negative or non-finite prices.
    pub fn new(from: Location, to: Location, price: f64) -> Result<Self, DomainError> {
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidPrice(price));
        }

        Ok(Self { from, to, price })
    }

    pub fn from(&self) -> &Location {
        &self.from
    }

    pub fn to(&self) -> &Location {
        &self.to
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}
