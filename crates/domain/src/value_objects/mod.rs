//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod location_candidate;
mod named_location;
mod provider_service;
mod surge_level;

pub use coordinate::Coordinate;
pub use location_candidate::LocationCandidate;
pub use named_location::{CURRENT_LOCATION_LABEL, NamedLocation};
pub use provider_service::ProviderService;
pub use surge_level::SurgeLevel;
