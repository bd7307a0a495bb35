//! Domain layer for the fare comparison workspace
//!
//! Contains the trip endpoints, provider set, and the normalized ride offer
//! model shared by every other crate. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
