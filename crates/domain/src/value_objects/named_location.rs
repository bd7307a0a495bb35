//! Named location value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Coordinate;

/// Label used when the point comes from device geolocation
pub const CURRENT_LOCATION_LABEL: &str = "Current location";

/// A coordinate with a human-readable label
///
/// Produced by the location resolver or by device geolocation and copied
/// by value into trip requests. The name may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLocation {
    /// Position of the place
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Display name
    #[serde(default)]
    pub name: String,
}

impl NamedLocation {
    /// Create a new named location
    #[must_use]
    pub fn new(coordinate: Coordinate, name: impl Into<String>) -> Self {
        Self {
            coordinate,
            name: name.into(),
        }
    }

    /// Location obtained from the device, labelled as the current position
    #[must_use]
    pub fn current_location(coordinate: Coordinate) -> Self {
        Self::new(coordinate, CURRENT_LOCATION_LABEL)
    }

    /// Whether this is the device-position placeholder
    #[must_use]
    pub fn is_current_location(&self) -> bool {
        self.name == CURRENT_LOCATION_LABEL
    }

    /// Latitude shortcut
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coordinate.latitude()
    }

    /// Longitude shortcut
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coordinate.longitude()
    }
}

impl From<NamedLocation> for Coordinate {
    fn from(location: NamedLocation) -> Self {
        location.coordinate
    }
}

impl fmt::Display for NamedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.coordinate)
        } else {
            write!(f, "{} ({})", self.name, self.coordinate)
        }
    }
}
