//! Adapters implementing application ports

mod fare_quote_adapter;
mod location_search_adapter;

use application::error::ApplicationError;
use integration_fares::FareServiceError;

pub use fare_quote_adapter::FareQuoteAdapter;
pub use location_search_adapter::LocationSearchAdapter;

/// Map fare backend failures onto the application's error kinds
pub(crate) fn map_fare_error(err: FareServiceError) -> ApplicationError {
    match err {
        FareServiceError::ParseError(msg) => ApplicationError::Decode(msg),
        FareServiceError::NoOffersFound(msg) => ApplicationError::NoOffersFound(msg),
        FareServiceError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        err @ (FareServiceError::ConnectionFailed(_)
        | FareServiceError::RequestFailed(_)
        | FareServiceError::RateLimitExceeded { .. }
        | FareServiceError::Timeout { .. }) => ApplicationError::Network(err.to_string()),
    }
}
