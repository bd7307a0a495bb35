//! Fare quote port - Interface for multi-provider price lookups

use async_trait::async_trait;
use domain::{Coordinate, RideOffer};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching normalized ride offers for a trip
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FareQuotePort: Send + Sync {
    /// Fetch offers for a trip
    ///
    /// Offers come back already normalized: Grab car classes first in
    /// backend order, then one offer each for Gojek, metered taxi and Zig.
    ///
    /// # Arguments
    /// * `origin` - Pickup coordinate
    /// * `destination` - Drop-off coordinate
    async fn quote_fares(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<RideOffer>, ApplicationError>;

    /// Check if the fare backend is reachable
    async fn is_available(&self) -> bool;
}
