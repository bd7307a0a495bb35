//! Ride-hailing fare integration
//!
//! Talks to the fare aggregator backend, which exposes two endpoints:
//! a text search for places and a price comparison across Grab, Gojek,
//! metered taxis and Zig for a coordinate pair.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`FareClient`] fetches the raw multi-provider price
//! payload, implemented by [`HttpFareClient`]. [`LocationSearchClient`] resolves
//! free text to candidate places via [`HttpLocationSearchClient`]. Raw payloads
//! are validated and turned into domain [`RideOffer`](domain::RideOffer)s by
//! [`normalize_prices`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::Coordinate;
//! use integration_fares::{FareClient, FareServiceConfig, HttpFareClient, normalize_prices};
//!
//! let config = FareServiceConfig::default();
//! let client = HttpFareClient::new(&config)?;
//!
//! let raw = client.fetch_prices(
//!     Coordinate::new(1.305893, 103.773858)?, // Kent Ridge
//!     Coordinate::new(1.305202, 103.773905)?, // UTown
//! ).await?;
//! let offers = normalize_prices(raw)?;
//! ```

mod client;
mod config;
mod error;
mod models;
mod normalize;
mod search;

pub use client::{FareClient, HttpFareClient};
pub use config::FareServiceConfig;
pub use error::FareServiceError;
pub use models::{
    GrabService, LocationSearchResponse, PriceEnvelope, RawGrabFare, RawGrabQuote,
    RawPriceResponse,
};
pub use normalize::normalize_prices;
pub use search::{HttpLocationSearchClient, LocationSearchClient};
