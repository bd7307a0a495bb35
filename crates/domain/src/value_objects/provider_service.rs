//! Ride-hailing provider value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Fare data source
///
/// A closed set. Declaration order is the order offers are listed in.
/// Serialized with the aggregator's wire keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProviderService {
    /// Grab, returns one fare range per car class
    #[serde(rename = "grab")]
    Grab,
    /// Gojek, single estimated fare
    #[serde(rename = "gojek")]
    Gojek,
    /// Metered street taxi, single estimated fare
    #[serde(rename = "meteredFare")]
    StandardTaxi,
    /// Zig taxi booking, single estimated fare
    #[serde(rename = "zig")]
    Zig,
}

impl ProviderService {
    /// All providers in declaration order
    pub const ALL: [Self; 4] = [Self::Grab, Self::Gojek, Self::StandardTaxi, Self::Zig];

    /// Key used by the price-comparison endpoint
    #[must_use]
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Gojek => "gojek",
            Self::StandardTaxi => "meteredFare",
            Self::Zig => "zig",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Grab => "Grab",
            Self::Gojek => "Gojek",
            Self::StandardTaxi => "Taxi (metered)",
            Self::Zig => "Zig",
        }
    }

    /// Whether this provider quotes a min/max range per sub-service
    #[must_use]
    pub const fn quotes_fare_range(&self) -> bool {
        matches!(self, Self::Grab)
    }
}

impl fmt::Display for ProviderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ProviderService {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_key() == s)
            .ok_or_else(|| DomainError::UnknownProvider(s.to_string()))
    }
}
