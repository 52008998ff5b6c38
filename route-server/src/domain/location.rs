//! Locations and their geographic coordinates.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::DomainError;

/// A latitude/longitude pair.
///
/// Both components are guaranteed finite, which makes float equality a
/// proper equivalence and lets coordinates take part in `Eq`/`Hash`.
/// Positive and negative zero compare and hash the same.
///
/// # Examples
///
/// ```
/// use route_server::domain::Coordinates;
///
/// let here = Coordinates::new(51.5, -0.12).unwrap();
/// assert_eq!(here.latitude(), 51.5);
///
/// assert!(Coordinates::new(f64::NAN, 0.0).is_err());
/// assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting non-finite components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Bit pattern used for hashing; folds -0.0 onto 0.0 to agree with `==`.
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

// Components are finite, so `==` is reflexive.
impl Eq for Coordinates {}

impl Hash for Coordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.latitude).hash(state);
        canonical_bits(self.longitude).hash(state);
    }
}

/// A named point on the map; a node of the connection graph.
///
/// Two locations are the same location when both title and coordinates
/// match. Titles alone are not unique identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    title: String,
    coordinates: Coordinates,
}

impl Location {
    /// Create a location. The title must not be empty.
    pub fn new(title: impl Into<String>, coordinates: Coordinates) -> Result<Self, DomainError> {
        let title = title.into();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }

        Ok(Self { title, coordinates })
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the location's coordinates.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
