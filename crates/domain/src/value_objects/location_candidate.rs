//! Location search result row

use serde::{Deserialize, Serialize};

use super::{Coordinate, NamedLocation};
use crate::errors::DomainError;

/// A candidate place returned by the text-search endpoint
///
/// Ephemeral: the whole result set is replaced on every new query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCandidate {
    /// Full street address
    #[serde(default)]
    pub address: String,
    /// Place name
    #[serde(default)]
    pub name: String,
    /// Abbreviated name
    #[serde(default)]
    pub short_name: String,
    /// Free-form hint text from the search backend
    #[serde(default)]
    pub tips: String,
    /// Distance reported by the search backend
    #[serde(default)]
    pub distance_between: f64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl LocationCandidate {
    /// Validated coordinate of this candidate
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if the backend sent an out-of-range point.
    pub fn coordinate(&self) -> Result<Coordinate, DomainError> {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Convert into a trip endpoint, keeping the place name as label
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if the backend sent an out-of-range point.
    pub fn to_named_location(&self) -> Result<NamedLocation, DomainError> {
        Ok(NamedLocation::new(self.coordinate()?, self.name.clone()))
    }
}
