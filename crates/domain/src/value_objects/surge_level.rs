//! Surge pricing notice

use serde::{Deserialize, Serialize};
use std::fmt;

/// Surge notice attached to a Grab car class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SurgeLevel {
    /// `NONE` or absent
    #[default]
    None,
    /// `LOW_SURGE`
    Low,
    /// `FRACTIONAL_SURGE`
    Fractional,
    /// `HIGH_SURGE`
    High,
    /// Any notice string not listed above
    Other(String),
}

impl SurgeLevel {
    /// Parse a raw notice; unrecognized values are kept verbatim
    #[must_use]
    pub fn parse(notice: &str) -> Self {
        match notice {
            "" | "NONE" => Self::None,
            "LOW_SURGE" => Self::Low,
            "FRACTIONAL_SURGE" => Self::Fractional,
            "HIGH_SURGE" => Self::High,
            other => Self::Other(other.to_string()),
        }
    }

    /// Parse an optional notice, treating absence as no surge
    #[must_use]
    pub fn from_notice(notice: Option<&str>) -> Self {
        notice.map_or(Self::None, Self::parse)
    }

    /// Whether riders should be warned about surge pricing
    #[must_use]
    pub const fn is_surging(&self) -> bool {
        matches!(self, Self::High | Self::Fractional)
    }

    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "NONE",
            Self::Low => "LOW_SURGE",
            Self::Fractional => "FRACTIONAL_SURGE",
            Self::High => "HIGH_SURGE",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for SurgeLevel {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SurgeLevel> for String {
    fn from(value: SurgeLevel) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SurgeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_and_fractional_are_surging() {
        assert!(SurgeLevel::parse("HIGH_SURGE").is_surging());
        assert!(SurgeLevel::parse("FRACTIONAL_SURGE").is_surging());
    }

    #[test]
    fn low_none_and_absent_are_not_surging() {
        assert!(!SurgeLevel::parse("LOW_SURGE").is_surging());
        assert!(!SurgeLevel::parse("NONE").is_surging());
        assert!(!SurgeLevel::from_notice(None).is_surging());
    }

    #[test]
    fn unknown_notice_kept_and_not_surging() {
        let level = SurgeLevel::parse("MEGA_SURGE");
        assert_eq!(level, SurgeLevel::Other("MEGA_SURGE".to_string()));
        assert!(!level.is_surging());
        assert_eq!(level.as_str(), "MEGA_SURGE");
    }

    #[test]
    fn notice_matching_is_case_sensitive() {
        assert!(!SurgeLevel::parse("high_surge").is_surging());
    }

    #[test]
    fn deserializes_from_string() {
        let level: SurgeLevel = serde_json::from_str("\"HIGH_SURGE\"").unwrap();
        assert_eq!(level, SurgeLevel::High);
    }
}
