//! Normalized ride offer
//!
//! One offer per Grab car class plus one per remaining provider. Grab
//! offers always carry a [`GrabFareRange`] and the Grab-only details
//! (eta, ett, deep link, icon, surge flag); every other provider carries
//! an [`EstimatedFare`] and none of those details. The constructors are
//! the only way to build an offer, so the pairing cannot be broken.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;
use crate::value_objects::ProviderService;

/// Min/max fare quoted for a Grab car class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrabFareRange {
    /// Lower bound
    pub min_fare: f64,
    /// Upper bound
    pub max_fare: f64,
    /// ISO currency code, e.g. "SGD"
    pub currency: String,
}

/// Single estimated fare in the trip's currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedFare {
    /// Estimated amount
    pub estimated_fare: f64,
}

/// Fare shape of an offer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fare {
    /// Range quoted by Grab
    Range(GrabFareRange),
    /// Scalar estimate from the other providers
    Estimated(EstimatedFare),
}

impl Fare {
    /// Amount shown in the comparison list (lower bound for ranges)
    #[must_use]
    pub const fn display_amount(&self) -> f64 {
        match self {
            Self::Range(range) => range.min_fare,
            Self::Estimated(estimate) => estimate.estimated_fare,
        }
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(range) => write!(
                f,
                "{} {:.2}-{:.2}",
                range.currency, range.min_fare, range.max_fare
            ),
            Self::Estimated(estimate) => write!(f, "~{:.2}", estimate.estimated_fare),
        }
    }
}

/// Grab-only fields of an offer
#[derive(Debug, Clone, PartialEq)]
pub struct GrabOfferDetails {
    /// Car class name, e.g. "JustGrab"
    pub service_name: String,
    /// Minutes until pickup
    pub eta: f64,
    /// Travel time value exposed to the view
    pub ett: f64,
    /// Deep link that opens the booking screen
    pub link: String,
    /// Car class icon
    pub icon_link: String,
    /// Whether surge pricing applies
    pub surge: bool,
}

/// A normalized, provider-independent ride offer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideOffer {
    service: ProviderService,
    fare: Fare,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    eta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ett: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    surge: Option<bool>,
}

impl RideOffer {
    /// Offer for one Grab car class
    #[must_use]
    pub fn grab(fare: GrabFareRange, details: GrabOfferDetails) -> Self {
        Self {
            service: ProviderService::Grab,
            fare: Fare::Range(fare),
            service_name: Some(details.service_name),
            eta: Some(details.eta),
            ett: Some(details.ett),
            link: Some(details.link),
            icon_link: Some(details.icon_link),
            surge: Some(details.surge),
        }
    }

    /// Offer for a provider that quotes a single estimate
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOffer` for [`ProviderService::Grab`], which
    /// must be built with [`RideOffer::grab`].
    pub fn estimated(service: ProviderService, estimated_fare: f64) -> Result<Self, DomainError> {
        if service.quotes_fare_range() {
            return Err(DomainError::InvalidOffer(format!(
                "{service} quotes a fare range, not an estimate"
            )));
        }
        Ok(Self {
            service,
            fare: Fare::Estimated(EstimatedFare { estimated_fare }),
            service_name: None,
            eta: None,
            ett: None,
            link: None,
            icon_link: None,
            surge: None,
        })
    }

    #[must_use]
    pub const fn service(&self) -> ProviderService {
        self.service
    }

    #[must_use]
    pub const fn fare(&self) -> &Fare {
        &self.fare
    }

    #[must_use]
    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    #[must_use]
    pub const fn eta(&self) -> Option<f64> {
        self.eta
    }

    #[must_use]
    pub const fn ett(&self) -> Option<f64> {
        self.ett
    }

    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    #[must_use]
    pub fn icon_link(&self) -> Option<&str> {
        self.icon_link.as_deref()
    }

    #[must_use]
    pub const fn surge(&self) -> Option<bool> {
        self.surge
    }

    /// Figure shown in the comparison list
    #[must_use]
    pub const fn display_fare(&self) -> f64 {
        self.fare.display_amount()
    }

    /// Name shown in the comparison list
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.service_name
            .as_deref()
            .unwrap_or_else(|| self.service.label())
    }
}

impl fmt::Display for RideOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.display_name(), self.fare)?;
        if let Some(eta) = self.eta {
            write!(f, " (pickup in {eta} min)")?;
        }
        if self.surge == Some(true) {
            write!(f, " [surge]")?;
        }
        Ok(())
    }
}

/// Offer with the lowest displayed fare
#[must_use]
pub fn cheapest_offer(offers: &[RideOffer]) -> Option<&RideOffer> {
    offers
        .iter()
        .min_by(|a, b| a.display_fare().total_cmp(&b.display_fare()))
}
