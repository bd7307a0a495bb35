//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod fare_quote_port;
mod location_search_port;

pub use fare_quote_port::FareQuotePort;
#[cfg(test)]
pub use fare_quote_port::MockFareQuotePort;
pub use location_search_port::LocationSearchPort;
#[cfg(test)]
pub use location_search_port::MockLocationSearchPort;
