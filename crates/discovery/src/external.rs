//! External place search seam.

use aroundin_api_client::{ApiResult, GroundedSearchClient, PlacesAnswer};
use aroundin_geo::Coordinate;
use std::future::Future;

/// Asynchronous place search used to augment local results.
///
/// Implemented by [`GroundedSearchClient`]; tests substitute fakes.
pub trait ExternalSearch {
    /// Search for places matching `query` around `location`.
    fn find_nearby_places(
        &self,
        query: &str,
        location: Coordinate,
    ) -> impl Future<Output = ApiResult<PlacesAnswer>> + Send;
}

impl ExternalSearch for GroundedSearchClient {
    fn find_nearby_places(
        &self,
        query: &str,
        location: Coordinate,
    ) -> impl Future<Output = ApiResult<PlacesAnswer>> + Send {
        GroundedSearchClient::find_nearby_places(self, query, location)
    }
}
