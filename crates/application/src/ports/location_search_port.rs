//! Location search port - Interface for free-text place lookup

use async_trait::async_trait;
use domain::LocationCandidate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for resolving free text to candidate places
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationSearchPort: Send + Sync {
    /// Search places matching `query`, in backend order
    ///
    /// Implementations return an empty list for `""` without a request.
    async fn search_locations(
        &self,
        query: &str,
    ) -> Result<Vec<LocationCandidate>, ApplicationError>;
}
