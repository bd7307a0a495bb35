//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Cloneable so the stateful components can keep the last failure in their
/// snapshot while still handing it to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Transport or connectivity failure, including non-2xx responses
    #[error("Network error: {0}")]
    Network(String),

    /// Response was not valid JSON or did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Valid response without route or price data
    #[error("No offers found: {0}")]
    NoOffersFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Whether the backend could not price this route at all
    pub const fn is_route_failure(&self) -> bool {
        matches!(self, Self::NoOffersFound(_))
    }
}
