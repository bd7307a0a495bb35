//! Domain entities

mod ride_offer;

pub use ride_offer::{
    EstimatedFare, Fare, GrabFareRange, GrabOfferDetails, RideOffer, cheapest_offer,
};
