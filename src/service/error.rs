use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while fetching list items.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Endpoint could not be built from configuration
    #[error("Invalid URL configuration")]
    InvalidUrl,

    /// Connection failed or the transport broke mid-request
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Request exceeded the total timeout
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Server answered with a non-2xx status
    #[error("Server responded with status {status}")]
    UnexpectedStatus { status: u16 },

    /// Payload is not a JSON array of items
    #[error("Failed to decode data: {0}")]
    Decode(#[from] serde_json::Error),

    /// Server answered with an empty body
    #[error("No data received from server")]
    NoData,
}

impl ServiceError {
    pub fn network<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        ServiceError::Network { source: err.into() }
    }

    /// Short machine-readable classification, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::InvalidUrl => "config",
            ServiceError::Network { .. } => "transport",
            ServiceError::Timeout { .. } => "timeout",
            ServiceError::UnexpectedStatus { .. } => "status",
            ServiceError::Decode(_) => "decode",
            ServiceError::NoData => "empty",
        }
    }
}
