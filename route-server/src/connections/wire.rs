//! Wire format of the connections feed.
//!
//! ```json
//! {
//!   "connections": [
//!     {
//!       "from": "London",
//!       "to": "Tokyo",
//!       "coordinates": {
//!         "from": { "lat": 51.5285582, "long": -0.241681 },
//!         "to": { "lat": 35.652832, "long": 139.839478 }
//!       },
//!       "price": 220
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{Connection, Coordinates, DomainError, Location};

use super::ConnectionsError;

/// Top-level feed document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionsResponse {
    pub connections: Vec<ConnectionDto>,
}

/// One connection as it appears on the wire.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionDto {
    pub from: String,
    pub to: String,
    pub coordinates: CoordinatePairDto,
    pub price: f64,
}

/// Coordinates of both ends of a connection.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CoordinatePairDto {
    pub from: CoordinatesDto,
    pub to: CoordinatesDto,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CoordinatesDto {
    pub lat: f64,
    pub long: f64,
}

impl CoordinatesDto {
    fn into_domain(self) -> Result<Coordinates, DomainError> {
        Coordinates::new(self.lat, self.long)
    }
}

impl ConnectionDto {
    /// Validate into a domain connection.
    pub fn into_connection(self) -> Result<Connection, DomainError> {
        let from = Location::new(self.from, self.coordinates.from.into_domain()?)?;
        let to = Location::new(self.to, self.coordinates.to.into_domain()?)?;
        Connection::new(from, to, self.price)
    }
}

impl From<&Connection> for ConnectionDto {
    fn from(c: &Connection) -> Self {
        let dto = |l: &Location| CoordinatesDto {
            lat: l.coordinates().latitude(),
            long: l.coordinates().longitude(),
        };

        Self {
            from: c.from().title().to_string(),
            to: c.to().title().to_string(),
            coordinates: CoordinatePairDto {
                from: dto(c.from()),
                to: dto(c.to()),
            },
            price: c.price(),
        }
    }
}

/// Parse and validate a feed document.
///
/// The whole feed is rejected if any record is invalid; the error names the
/// first bad record.
pub fn parse_connections(body: &str) -> Result<Vec<Connection>, ConnectionsError> {
    let response: ConnectionsResponse =
        serde_json::from_str(body).map_err(|e| ConnectionsError::Json {
            message: e.to_string(),
        })?;

    response
        .connections
        .into_iter()
        .enumerate()
        .map(|(index, dto)| {
            dto.into_connection()
                .map_err(|source| ConnectionsError::Invalid { index, source })
        })
        .collect()
}
