//! Location search adapter - Implements LocationSearchPort using integration_fares

use application::error::ApplicationError;
use application::ports::LocationSearchPort;
use async_trait::async_trait;
use domain::LocationCandidate;
use integration_fares::{FareServiceConfig, HttpLocationSearchClient, LocationSearchClient};
use tracing::instrument;

use super::map_fare_error;

/// Adapter for the backend's place text search
#[derive(Debug)]
pub struct LocationSearchAdapter {
    client: HttpLocationSearchClient,
}

impl LocationSearchAdapter {
    /// Wrap an existing search client
    #[must_use]
    pub const fn new(client: HttpLocationSearchClient) -> Self {
        Self { client }
    }

    /// Build the adapter and its HTTP client from configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the configuration is
    /// invalid or the HTTP client cannot be initialized.
    pub fn from_config(config: &FareServiceConfig) -> Result<Self, ApplicationError> {
        HttpLocationSearchClient::new(config)
            .map(Self::new)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))
    }
}

#[async_trait]
impl LocationSearchPort for LocationSearchAdapter {
    #[instrument(skip(self))]
    async fn search_locations(
        &self,
        query: &str,
    ) -> Result<Vec<LocationCandidate>, ApplicationError> {
        self.client
            .search_locations(query)
            .await
            .map_err(map_fare_error)
    }
}
