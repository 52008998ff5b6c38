//! Domain error types.
//!
//! These errors represent validation failures at the point where raw
//! connection data enters the domain. They are distinct from API/IO errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A coordinate component is NaN or infinite
    #[error("invalid coordinates ({latitude}, {longitude}): must be finite")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// A location was given an empty title
    #[error("location title must not be empty")]
    EmptyTitle,

    /// A connection price is negative or not finite
    #[error("invalid price {0}: must be finite and non-negative")]
    InvalidPrice(f64),
}
