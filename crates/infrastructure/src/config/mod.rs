//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `config.toml` in the working directory, then `FARECOMPARE_*` environment
//! variables. Nested keys use `__`, e.g. `FARECOMPARE_FARES__BASE_URL`.

use std::path::Path;

use integration_fares::FareServiceConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "FARECOMPARE";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fare backend endpoints and HTTP client settings
    #[serde(default)]
    pub fares: FareServiceConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result fails
    /// validation.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::with_name("config").required(false),
            Self::environment(),
        )
    }

    /// Load configuration from an explicit file, still honoring environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or invalid, or the result
    /// fails validation.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true), Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn build<F>(file: F, environment: config::Environment) -> Result<Self, config::ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate().map_err(config::ConfigError::Message)?;
        Ok(config)
    }

    /// Validate all sections
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.fares.validate().map_err(|e| format!("fares: {e}"))?;
        self.logging.validate().map_err(|e| format!("logging: {e}"))
    }
}
