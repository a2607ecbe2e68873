//! Discovery service: local search first, grounded place search second.

use crate::external::ExternalSearch;
use aroundin_api_client::{ApiError, ApiResult, PlacesAnswer};
use aroundin_geo::{Coordinate, LocationProvider, NoLocation};
use aroundin_search::{
    filter_shops_with_threshold, search_local_data, Catalog, SearchResult, Shop, ShopFilter,
    RECOMMENDED_MIN_RATING,
};
use aroundin_telemetry::Timer;
use serde::Serialize;
use std::fmt;
use std::future::{ready, Future};
use std::sync::Arc;
use tracing::{debug, warn};

/// Placeholder searcher for services built without external search.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOnly;

impl ExternalSearch for LocalOnly {
    fn find_nearby_places(
        &self,
        _query: &str,
        _location: Coordinate,
    ) -> impl Future<Output = ApiResult<PlacesAnswer>> + Send {
        ready(Err(ApiError::config("external search is disabled")))
    }
}

/// Outcome of one discovery search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryResults<'a> {
    /// Requester position used for distances, if known
    pub location: Option<Coordinate>,
    /// Ranked catalog matches; always present
    pub local_results: Vec<SearchResult<'a>>,
    /// Grounded place answer, when it was requested and succeeded
    pub external: Option<PlacesAnswer>,
}

impl DiscoveryResults<'_> {
    /// Returns true if a grounded place answer is attached.
    pub fn has_external_results(&self) -> bool {
        self.external.is_some()
    }
}

/// Customer-facing discovery over one catalog.
pub struct DiscoveryService<E = LocalOnly> {
    catalog: Arc<Catalog>,
    location: Box<dyn LocationProvider + Send + Sync>,
    external: Option<E>,
    recommended_min_rating: f64,
}

impl<E> fmt::Debug for DiscoveryService<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveryService")
            .field("shops", &self.catalog.len())
            .field("has_external", &self.external.is_some())
            .field("recommended_min_rating", &self.recommended_min_rating)
            .finish_non_exhaustive()
    }
}

impl DiscoveryService<LocalOnly> {
    /// Local-only discovery with no requester location.
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Self {
            catalog: catalog.into(),
            location: Box::new(NoLocation),
            external: None,
            recommended_min_rating: RECOMMENDED_MIN_RATING,
        }
    }
}

impl<E: ExternalSearch> DiscoveryService<E> {
    /// Attach an external place searcher.
    pub fn with_external<F: ExternalSearch>(self, external: F) -> DiscoveryService<F> {
        DiscoveryService {
            catalog: self.catalog,
            location: self.location,
            external: Some(external),
            recommended_min_rating: self.recommended_min_rating,
        }
    }

    /// Detach the external searcher, keeping its type.
    #[must_use]
    pub fn without_external(mut self) -> Self {
        self.external = None;
        self
    }

    /// Use `provider` for the requester position.
    #[must_use]
    pub fn with_location(mut self, provider: impl LocationProvider + Send + Sync + 'static) -> Self {
        self.location = Box::new(provider);
        self
    }

    /// Set the minimum rating for [`ShopFilter::Recommended`].
    #[must_use]
    pub fn with_recommended_min_rating(mut self, min_rating: f64) -> Self {
        self.recommended_min_rating = min_rating;
        self
    }

    /// The catalog being searched.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns true if an external searcher is attached.
    pub fn has_external(&self) -> bool {
        self.external.is_some()
    }

    /// Search local data, then ask the external searcher when possible.
    ///
    /// The external call is made only for a non-blank query with a known
    /// requester position. Its failure is logged and never affects the local
    /// results. Each call is independent; overlapping searches are not
    /// cancelled or de-duplicated.
    pub async fn search(&self, query: &str) -> DiscoveryResults<'_> {
        let timer = Timer::start("discovery_search");
        let location = self.location.current_location();

        let local_results = search_local_data(&self.catalog, query, location);

        let external = match (&self.external, location) {
            (Some(searcher), Some(at)) if !query.trim().is_empty() => {
                match searcher.find_nearby_places(query, at).await {
                    Ok(answer) => Some(answer),
                    Err(e) => {
                        warn!(error = %e, "External place search failed, showing local results only");
                        None
                    }
                }
            }
            (Some(_), None) => {
                debug!("Requester location unavailable, skipping external place search");
                None
            }
            _ => None,
        };

        timer.stop();

        DiscoveryResults {
            location,
            local_results,
            external,
        }
    }

    /// Local search only, without touching the external searcher.
    pub fn search_local(&self, query: &str) -> Vec<SearchResult<'_>> {
        search_local_data(&self.catalog, query, self.location.current_location())
    }

    /// List shops for browsing, in catalog order.
    pub fn browse(&self, filter: ShopFilter) -> Vec<&Shop> {
        filter_shops_with_threshold(&self.catalog, filter, self.recommended_min_rating)
    }
}
