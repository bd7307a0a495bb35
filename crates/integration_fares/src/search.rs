//! Place text-search client
//!
//! Resolves free text to candidate places through the backend's search
//! endpoint. An empty query never reaches the network.

use async_trait::async_trait;
use domain::LocationCandidate;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::client::{build_http_client, read_success_body};
use crate::config::FareServiceConfig;
use crate::error::FareServiceError;
use crate::models::LocationSearchResponse;

/// Trait for place search clients
#[async_trait]
pub trait LocationSearchClient: Send + Sync {
    /// Search places by free text; `""` yields no candidates without a request
    async fn search_locations(
        &self,
        query: &str,
    ) -> Result<Vec<LocationCandidate>, FareServiceError>;
}

/// HTTP client for the aggregator's place search endpoint
#[derive(Debug)]
pub struct HttpLocationSearchClient {
    client: Client,
    config: FareServiceConfig,
}

impl HttpLocationSearchClient {
    /// Create a new place search client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &FareServiceConfig) -> Result<Self, FareServiceError> {
        Ok(Self {
            client: build_http_client(config)?,
            config: config.clone(),
        })
    }

    fn parse_search_response(body: &str) -> Result<Vec<LocationCandidate>, FareServiceError> {
        let response: LocationSearchResponse =
            serde_json::from_str(body).map_err(|e| FareServiceError::ParseError(e.to_string()))?;
        Ok(response.results)
    }
}

#[async_trait]
impl LocationSearchClient for HttpLocationSearchClient {
    #[instrument(skip(self))]
    async fn search_locations(
        &self,
        query: &str,
    ) -> Result<Vec<LocationCandidate>, FareServiceError> {
        if query.is_empty() {
            debug!("No search string entered");
            return Ok(Vec::new());
        }

        let url = self.config.search_url();
        debug!(?url, %query, "Searching locations");

        let response = self
            .client
            .get(&url)
            .query(&[("searchString", query)])
            .send()
            .await
            .map_err(|e| FareServiceError::from_send(&e, self.config.timeout_secs))?;

        let body = read_success_body(response).await?;
        let results = Self::parse_search_response(&body)?;

        debug!(count = results.len(), "Locations found");
        Ok(results)
    }
}
