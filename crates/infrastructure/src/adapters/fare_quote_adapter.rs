//! Fare quote adapter - Implements FareQuotePort using integration_fares

use application::error::ApplicationError;
use application::ports::FareQuotePort;
use async_trait::async_trait;
use domain::{Coordinate, RideOffer};
use integration_fares::{FareClient, FareServiceConfig, HttpFareClient, normalize_prices};
use tracing::{debug, instrument};

use super::map_fare_error;

/// Adapter that fetches raw prices and hands back normalized offers
#[derive(Debug)]
pub struct FareQuoteAdapter {
    client: HttpFareClient,
}

impl FareQuoteAdapter {
    /// Wrap an existing price client
    #[must_use]
    pub const fn new(client: HttpFareClient) -> Self {
        Self { client }
    }

    /// Build the adapter and its HTTP client from configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the configuration is
    /// invalid or the HTTP client cannot be initialized.
    pub fn from_config(config: &FareServiceConfig) -> Result<Self, ApplicationError> {
        HttpFareClient::new(config)
            .map(Self::new)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))
    }
}

#[async_trait]
impl FareQuotePort for FareQuoteAdapter {
    #[instrument(skip(self))]
    async fn quote_fares(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<RideOffer>, ApplicationError> {
        let raw = self
            .client
            .fetch_prices(origin, destination)
            .await
            .map_err(map_fare_error)?;

        let offers = normalize_prices(raw).map_err(map_fare_error)?;
        debug!(count = offers.len(), "Normalized offers");
        Ok(offers)
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
