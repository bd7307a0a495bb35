//! Fare backend configuration

use serde::{Deserialize, Serialize};

/// Configuration for the fare aggregator backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareServiceConfig {
    /// Base URL shared by the price and search endpoints
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the price-comparison endpoint
    #[serde(default = "default_prices_path")]
    pub prices_path: String,

    /// Path of the place text-search endpoint
    #[serde(default = "default_search_path")]
    pub search_path: String,

    /// HTTP client timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://hacknroll2023.onrender.com".to_string()
}

fn default_prices_path() -> String {
    "/getprices/all".to_string()
}

fn default_search_path() -> String {
    "/locations".to_string()
}

// The backend runs on a free tier that cold-starts slowly
const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("farecompare/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for FareServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            prices_path: default_prices_path(),
            search_path: default_search_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl FareServiceConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Full URL of the price-comparison endpoint
    #[must_use]
    pub fn prices_url(&self) -> String {
        join_url(&self.base_url, &self.prices_path)
    }

    /// Full URL of the place search endpoint
    #[must_use]
    pub fn search_url(&self) -> String {
        join_url(&self.base_url, &self.search_path)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must start with http:// or https://".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
