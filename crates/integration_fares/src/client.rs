//! Price-comparison client
//!
//! Fetches the raw multi-provider price payload for a coordinate pair.

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::{Client, Response};
use tracing::{debug, instrument};

use crate::config::FareServiceConfig;
use crate::error::FareServiceError;
use crate::models::{PriceEnvelope, RawPriceResponse};

/// Trait for price-comparison clients
#[async_trait]
pub trait FareClient: Send + Sync {
    /// Fetch validated raw prices for a trip
    async fn fetch_prices(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RawPriceResponse, FareServiceError>;

    /// Check if the backend is reachable
    async fn is_healthy(&self) -> bool;
}

/// HTTP client for the aggregator's price endpoint
#[derive(Debug)]
pub struct HttpFareClient {
    client: Client,
    config: FareServiceConfig,
}

impl HttpFareClient {
    /// Create a new price client
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

    /// Query parameters for a trip, values passed through unrounded
    fn trip_params(origin: Coordinate, destination: Coordinate) -> [(&'static str, String); 4] {
        [
            ("fromLat", origin.latitude().to_string()),
            ("fromLong", origin.longitude().to_string()),
            ("toLat", destination.latitude().to_string()),
            ("toLong", destination.longitude().to_string()),
        ]
    }
}

#[async_trait]
impl FareClient for HttpFareClient {
    #[instrument(skip(self), fields(from = %origin, to = %destination))]
    async fn fetch_prices(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RawPriceResponse, FareServiceError> {
        let url = self.config.prices_url();
        let params = Self::trip_params(origin, destination);

        debug!(?url, "Fetching prices");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| FareServiceError::from_send(&e, self.config.timeout_secs))?;

        let body = read_success_body(response).await?;
        let raw = PriceEnvelope::parse(&body)?;

        debug!(grab_services = raw.grab.services.len(), "Prices received");
        Ok(raw)
    }

    async fn is_healthy(&self) -> bool {
        self.client
            .get(&self.config.base_url)
            .send()
            .await
            .is_ok()
    }
}

/// Build the shared reqwest client from configuration
pub(crate) fn build_http_client(config: &FareServiceConfig) -> Result<Client, FareServiceError> {
    config
        .validate()
        .map_err(FareServiceError::ConfigurationError)?;

    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| FareServiceError::ConnectionFailed(e.to_string()))
}

/// Map non-success statuses and read the body as text
pub(crate) async fn read_success_body(response: Response) -> Result<String, FareServiceError> {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(FareServiceError::RateLimitExceeded {
            retry_after_secs: response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok()),
        });
    }

    if !status.is_success() {
        return Err(FareServiceError::RequestFailed(format!("HTTP {status}")));
    }

    response
        .text()
        .await
        .map_err(|e| FareServiceError::ConnectionFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_params_pass_values_through() {
        let origin = Coordinate::new(1.305_893, 103.773_858).unwrap();
        let destination = Coordinate::new(1.305_202, 103.773_905).unwrap();
        let params = HttpFareClient::trip_params(origin, destination);
        assert_eq!(params[0], ("fromLat", "1.305893".to_string()));
        assert_eq!(params[1], ("fromLong", "103.773858".to_string()));
        assert_eq!(params[2], ("toLat", "1.305202".to_string()));
        assert_eq!(params[3], ("toLong", "103.773905".to_string()));
    }

    #[test]
    fn test_trip_params_keep_full_precision() {
        let origin = Coordinate::new(1.304_570_123_456_7, 103.0).unwrap();
        let params = HttpFareClient::trip_params(origin, origin);
        assert_eq!(params[0].1, "1.3045701234567");
        assert_eq!(params[1].1, "103");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = FareServiceConfig {
            timeout_secs: 0,
            ..FareServiceConfig::for_testing()
        };
        let err = HttpFareClient::new(&config).unwrap_err();
        assert!(matches!(err, FareServiceError::ConfigurationError(_)));
    }
}
