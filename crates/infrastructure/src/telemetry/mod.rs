//! Logging initialization
//!
//! Console logging through `tracing-subscriber`, as plain text or JSON lines.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_logging, verbosity_filter};
