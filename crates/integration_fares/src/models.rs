//! Wire models of the fare backend
//!
//! Payloads are untrusted: they are deserialized into strict types and
//! checked with [`RawPriceResponse::validate`] before normalization.

use domain::{LocationCandidate, ProviderService};
use serde::{Deserialize, Serialize};

use crate::error::FareServiceError;

/// Envelope of the price-comparison endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PriceEnvelope {
    /// Backend status message
    #[serde(default)]
    pub message: String,
    /// Price data, absent or `null` when the backend found no route
    #[serde(default)]
    pub data: Option<RawPriceResponse>,
}

/// Envelope of the place search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LocationSearchResponse {
    /// Backend status message
    #[serde(default)]
    pub message: String,
    /// Matching places, in backend order
    pub results: Vec<LocationCandidate>,
}

/// Provider-shaped price payload, keyed by provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPriceResponse {
    /// Grab quotes, one per car class
    pub grab: RawGrabQuote,
    /// Gojek estimate
    pub gojek: f64,
    /// Metered taxi estimate
    #[serde(rename = "meteredFare")]
    pub metered_fare: f64,
    /// Zig estimate
    pub zig: f64,
}

/// Grab entry of the price payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGrabQuote {
    /// Car classes in backend order
    pub services: Vec<GrabService>,
}

/// One Grab car class as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrabService {
    #[serde(rename = "serviceID", default)]
    pub service_id: i64,
    #[serde(default)]
    pub service_name: String,
    pub fare: RawGrabFare,
    #[serde(default)]
    pub surge_notice: Option<String>,
    #[serde(default)]
    pub icon_link: String,
    #[serde(default)]
    pub deep_link: String,
    pub direct_deep_link: String,
    pub eta: f64,
    #[serde(default)]
    pub ett: Option<f64>,
}

/// Fare range of a Grab car class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGrabFare {
    pub currency: String,
    pub min_fare: f64,
    pub max_fare: f64,
}

impl RawPriceResponse {
    /// Scalar estimate for a single-fare provider; `None` for Grab
    #[must_use]
    pub const fn estimated_fare(&self, provider: ProviderService) -> Option<f64> {
        match provider {
            ProviderService::Grab => None,
            ProviderService::Gojek => Some(self.gojek),
            ProviderService::StandardTaxi => Some(self.metered_fare),
            ProviderService::Zig => Some(self.zig),
        }
    }

    /// Check value ranges that serde cannot express
    ///
    /// # Errors
    ///
    /// Returns `FareServiceError::ParseError` on negative fares, inverted
    /// Grab ranges, or a missing currency.
    pub fn validate(&self) -> Result<(), FareServiceError> {
        for provider in ProviderService::ALL {
            let Some(fare) = self.estimated_fare(provider) else {
                continue;
            };
            if fare < 0.0 {
                return Err(FareServiceError::ParseError(format!(
                    "negative {} fare: {fare}",
                    provider.as_key()
                )));
            }
        }

        for service in &self.grab.services {
            let fare = &service.fare;
            if fare.min_fare < 0.0 || fare.max_fare < fare.min_fare {
                return Err(FareServiceError::ParseError(format!(
                    "invalid fare range {}..{} for Grab service '{}'",
                    fare.min_fare, fare.max_fare, service.service_name
                )));
            }
            if fare.currency.trim().is_empty() {
                return Err(FareServiceError::ParseError(format!(
                    "missing currency for Grab service '{}'",
                    service.service_name
                )));
            }
        }

        Ok(())
    }
}

impl PriceEnvelope {
    /// Parse and validate a raw response body
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for malformed or out-of-range payloads and
    /// `NoOffersFound` when the envelope carries no price data.
    pub fn parse(body: &str) -> Result<RawPriceResponse, FareServiceError> {
        let envelope: Self =
            serde_json::from_str(body).map_err(|e| FareServiceError::ParseError(e.to_string()))?;

        let data = envelope
            .data
            .ok_or(FareServiceError::NoOffersFound(envelope.message))?;
        data.validate()?;
        Ok(data)
    }
}
