//! Application layer - Use cases and orchestration
//!
//! Holds the two stateful components behind the comparison screens: the
//! location resolver and the fare aggregator. Both talk to the outside world
//! only through the ports defined here.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
