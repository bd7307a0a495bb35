//! Location resolver
//!
//! Turns free text into candidate places. Like the fare aggregator it tags
//! every search with a request number and only applies the newest one, so a
//! slow response for an earlier keystroke cannot overwrite later results.

use std::sync::Arc;

use domain::LocationCandidate;
use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::LocationSearchPort;

/// Point-in-time copy of the resolver state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationSnapshot {
    /// Query of the most recently issued search
    pub query: String,
    pub is_loading: bool,
    /// Candidates of the latest applied search, in backend order
    pub locations: Vec<LocationCandidate>,
    pub last_error: Option<ApplicationError>,
}

#[derive(Debug, Default)]
struct LocationState {
    snapshot: LocationSnapshot,
    latest_request: u64,
}

/// Clears the loading flag when a search is dropped before it settles
struct InFlightSearch<'a> {
    state: &'a Mutex<LocationState>,
    request: u64,
}

impl Drop for InFlightSearch<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if state.latest_request == self.request && state.snapshot.is_loading {
            debug!(request = self.request, "Location search cancelled");
            state.snapshot.is_loading = false;
        }
    }
}

/// Resolves search text to candidate places
pub struct LocationResolver<P: LocationSearchPort> {
    port: Arc<P>,
    state: Mutex<LocationState>,
}

impl<P: LocationSearchPort> std::fmt::Debug for LocationResolver<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("LocationResolver")
            .field("query", &state.snapshot.query)
            .field("is_loading", &state.snapshot.is_loading)
            .field("latest_request", &state.latest_request)
            .finish_non_exhaustive()
    }
}

impl<P: LocationSearchPort> LocationResolver<P> {
    /// Create a resolver with an empty query and no results
    #[must_use]
    pub fn new(port: Arc<P>) -> Self {
        Self {
            port,
            state: Mutex::new(LocationState::default()),
        }
    }

    /// Search places for `query`
    ///
    /// An empty query clears the results without touching the network. The
    /// returned candidates are always those of this call, but they only
    /// become visible state if no newer search was issued meanwhile.
    ///
    /// # Errors
    ///
    /// Returns the port error. The previous results stay visible and the
    /// error is recorded in [`LocationSnapshot::last_error`].
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<LocationCandidate>, ApplicationError> {
        let request = {
            let mut state = self.state.lock();
            state.latest_request += 1;
            state.snapshot.query = query.to_string();
            if query.is_empty() {
                state.snapshot.locations.clear();
                state.snapshot.is_loading = false;
                state.snapshot.last_error = None;
                return Ok(Vec::new());
            }
            state.snapshot.is_loading = true;
            state.latest_request
        };

        let _in_flight = InFlightSearch {
            state: &self.state,
            request,
        };
        let result = self.port.search_locations(query).await;

        let mut state = self.state.lock();
        if request != state.latest_request {
            debug!(
                request,
                latest = state.latest_request,
                "Discarding stale search response"
            );
            return result;
        }

        state.snapshot.is_loading = false;
        match &result {
            Ok(locations) => {
                debug!(request, count = locations.len(), "Locations updated");
                state.snapshot.locations.clone_from(locations);
                state.snapshot.last_error = None;
            },
            Err(err) => {
                warn!(request, error = %err, "Location search failed");
                state.snapshot.last_error = Some(err.clone());
            },
        }
        result
    }

    /// Replace the current query, searching only if it changed
    ///
    /// # Errors
    ///
    /// Same as [`Self::search`].
    pub async fn set_query(&self, query: &str) -> Result<(), ApplicationError> {
        if self.state.lock().snapshot.query == query {
            return Ok(());
        }
        self.search(query).await.map(|_| ())
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> LocationSnapshot {
        self.state.lock().snapshot.clone()
    }

    /// Candidates of the latest applied search
    #[must_use]
    pub fn locations(&self) -> Vec<LocationCandidate> {
        self.state.lock().snapshot.locations.clone()
    }

    /// Whether a search is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.lock().snapshot.is_loading
    }
}
