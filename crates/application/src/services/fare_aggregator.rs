//! Fare aggregator
//!
//! Owns the offer list for one origin/destination pair. Every fetch is
//! tagged with a monotonically increasing request number; a response is
//! applied only if no newer request has been issued since, so overlapping
//! refetches can never leave an older trip's offers on screen.
//!
//! Failures never escape [`FareAggregator::refetch`]. They are logged, kept
//! as [`FareSnapshot::last_error`] and otherwise leave the previous offers in
//! place, except for a backend "no route" answer which clears them. A fetch
//! whose future is dropped mid-flight settles the loading flag on drop.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::{Coordinate, RideOffer, cheapest_offer};
use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::FareQuotePort;

/// Shown when there is nothing to list
pub const NO_RIDES_FOUND_MESSAGE: &str = "No rides found";

/// Shown when the backend could not route the trip
pub const TRY_ANOTHER_LOCATION_MESSAGE: &str = "Please try another location";

/// What the offer list should currently render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FareListStatus {
    /// A fetch for the current trip is in flight
    Loading,
    /// This many offers are available
    Offers(usize),
    /// Nothing to show; render the fallback message
    NoRidesFound,
}

/// Point-in-time copy of the aggregator state
#[derive(Debug, Clone, PartialEq)]
pub struct FareSnapshot {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub is_loading: bool,
    /// `None` until a fetch succeeds
    pub offers: Option<Vec<RideOffer>>,
    /// Error of the latest settled fetch, cleared on success
    pub last_error: Option<ApplicationError>,
    /// When `offers` was last replaced
    pub updated_at: Option<DateTime<Utc>>,
}

impl FareSnapshot {
    /// Render status derived from loading flag and offers
    #[must_use]
    pub fn status(&self) -> FareListStatus {
        if self.is_loading {
            return FareListStatus::Loading;
        }
        match self.offers.as_deref() {
            Some(offers) if !offers.is_empty() => FareListStatus::Offers(offers.len()),
            _ => FareListStatus::NoRidesFound,
        }
    }

    /// Fallback message for the view, if the list has nothing to show
    #[must_use]
    pub fn fallback_message(&self) -> Option<&'static str> {
        match self.status() {
            FareListStatus::Loading | FareListStatus::Offers(_) => None,
            FareListStatus::NoRidesFound => match &self.last_error {
                Some(err) if err.is_route_failure() => Some(TRY_ANOTHER_LOCATION_MESSAGE),
                _ => Some(NO_RIDES_FOUND_MESSAGE),
            },
        }
    }

    /// Lowest-priced offer of the current list
    #[must_use]
    pub fn cheapest(&self) -> Option<&RideOffer> {
        self.offers.as_deref().and_then(cheapest_offer)
    }
}

#[derive(Debug)]
struct FareState {
    origin: Coordinate,
    destination: Coordinate,
    is_loading: bool,
    offers: Option<Vec<RideOffer>>,
    last_error: Option<ApplicationError>,
    updated_at: Option<DateTime<Utc>>,
    /// Number of the most recently issued request
    latest_request: u64,
}

/// Clears the loading flag when a fetch is dropped before it settles
struct InFlightFetch<'a> {
    state: &'a Mutex<FareState>,
    request: u64,
}

impl Drop for InFlightFetch<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if state.latest_request == self.request && state.is_loading {
            debug!(request = self.request, "Fare fetch cancelled");
            state.is_loading = false;
        }
    }
}

/// Fetches and holds normalized offers for a trip
pub struct FareAggregator<P: FareQuotePort> {
    port: Arc<P>,
    state: Mutex<FareState>,
}

impl<P: FareQuotePort> std::fmt::Debug for FareAggregator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("FareAggregator")
            .field("origin", &state.origin)
            .field("destination", &state.destination)
            .field("is_loading", &state.is_loading)
            .field("latest_request", &state.latest_request)
            .finish_non_exhaustive()
    }
}

impl<P: FareQuotePort> FareAggregator<P> {
    /// Create an idle aggregator; nothing is fetched until [`Self::refetch`]
    #[must_use]
    pub fn new(port: Arc<P>, origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            port,
            state: Mutex::new(FareState {
                origin,
                destination,
                is_loading: false,
                offers: None,
                last_error: None,
                updated_at: None,
                latest_request: 0,
            }),
        }
    }

    /// Create an aggregator and run the initial fetch for the trip
    pub async fn start(port: Arc<P>, origin: Coordinate, destination: Coordinate) -> Self {
        let aggregator = Self::new(port, origin, destination);
        aggregator.refetch(None, None).await;
        aggregator
    }

    /// Re-run the fetch, optionally replacing either endpoint first
    ///
    /// With neither argument the current trip is fetched again. Supplying one
    /// or both coordinates replaces them and issues exactly one request for
    /// the resulting pair.
    #[instrument(skip(self))]
    pub async fn refetch(&self, origin: Option<Coordinate>, destination: Option<Coordinate>) {
        let (request, origin, destination) = {
            let mut state = self.state.lock();
            if let Some(origin) = origin {
                state.origin = origin;
            }
            if let Some(destination) = destination {
                state.destination = destination;
            }
            state.latest_request += 1;
            state.is_loading = true;
            (state.latest_request, state.origin, state.destination)
        };

        let _in_flight = InFlightFetch {
            state: &self.state,
            request,
        };

        debug!(request, from = %origin, to = %destination, "Fetching fares");
        let result = self.port.quote_fares(origin, destination).await;

        let mut state = self.state.lock();
        if request != state.latest_request {
            debug!(
                request,
                latest = state.latest_request,
                "Discarding stale fare response"
            );
            return;
        }

        state.is_loading = false;
        match result {
            Ok(offers) => {
                debug!(request, count = offers.len(), "Fares updated");
                state.offers = Some(offers);
                state.last_error = None;
                state.updated_at = Some(Utc::now());
            },
            Err(err) => {
                warn!(request, error = %err, "Fare fetch failed");
                if err.is_route_failure() {
                    state.offers = None;
                    state.updated_at = Some(Utc::now());
                }
                state.last_error = Some(err);
            },
        }
    }

    /// Move the pickup point and fetch again
    pub async fn set_origin(&self, origin: Coordinate) {
        self.refetch(Some(origin), None).await;
    }

    /// Move the drop-off point and fetch again
    pub async fn set_destination(&self, destination: Coordinate) {
        self.refetch(None, Some(destination)).await;
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> FareSnapshot {
        let state = self.state.lock();
        FareSnapshot {
            origin: state.origin,
            destination: state.destination,
            is_loading: state.is_loading,
            offers: state.offers.clone(),
            last_error: state.last_error.clone(),
            updated_at: state.updated_at,
        }
    }

    /// Whether a fetch for the current trip is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.lock().is_loading
    }

    /// Offers of the latest successful fetch
    #[must_use]
    pub fn offers(&self) -> Option<Vec<RideOffer>> {
        self.state.lock().offers.clone()
    }

    /// Current render status
    #[must_use]
    pub fn status(&self) -> FareListStatus {
        self.snapshot().status()
    }
}
