//! Connection feed error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur while loading connections.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionsError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed rejected our credentials
    #[error("unauthorized: connections feed refused the request")]
    Unauthorized,

    /// Feed returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the feed JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A record decoded but violates a domain rule
    #[error("invalid connection at index {index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: DomainError,
    },

    /// Reading a local feed file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
