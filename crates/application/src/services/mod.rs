//! Application services - Use case implementations

mod fare_aggregator;
mod location_resolver;

pub use fare_aggregator::{
    FareAggregator, FareListStatus, FareSnapshot, NO_RIDES_FOUND_MESSAGE,
    TRY_ANOTHER_LOCATION_MESSAGE,
};
pub use location_resolver::{LocationResolver, LocationSnapshot};
