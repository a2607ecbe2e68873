//! Building a discovery service from configuration.

use crate::service::DiscoveryService;
use aroundin_api_client::{ClientConfig, GroundedSearchClient};
use aroundin_core::config::{Config, ConfigSchema};
use aroundin_core::{Error, ErrorCode, Result, ResultExt};
use aroundin_geo::{Coordinate, FixedLocation};
use aroundin_search::{Catalog, SearchError};
use tracing::{info, warn};

/// Load a catalog from `path`, or the bundled demo catalog when `None`.
pub fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::from_path(path)
                .map_err(catalog_error)
                .context(format!("Loading catalog {path}"))?;
            info!(path, shops = catalog.len(), "Loaded catalog");
            Ok(catalog)
        }
        None => Ok(Catalog::demo().clone()),
    }
}

/// Build a discovery service over `catalog` from validated settings.
///
/// A configured fixed location becomes the requester position. The grounded
/// search client is attached only when external search is enabled; a missing
/// API key is reported when searching, not here.
pub fn from_config(
    catalog: Catalog,
    config: &Config,
) -> Result<DiscoveryService<GroundedSearchClient>> {
    from_schema(catalog, &config.schema)
}

/// Same as [`from_config`], for a bare schema.
pub fn from_schema(
    catalog: Catalog,
    schema: &ConfigSchema,
) -> Result<DiscoveryService<GroundedSearchClient>> {
    let client = GroundedSearchClient::with_config(ClientConfig::from_settings(&schema.external))?;
    if schema.external.enabled && !client.has_api_key() {
        warn!("External place search enabled without an API key");
    }

    let mut service = DiscoveryService::new(catalog)
        .with_external(client)
        .with_recommended_min_rating(schema.search.recommended_min_rating);

    if !schema.external.enabled {
        service = service.without_external();
    }

    if let Some(location) = schema.location {
        let coordinate = Coordinate::try_new(location.latitude, location.longitude)
            .map_err(|e| Error::invalid_coordinate(e.to_string()))
            .context("Reading [location]")?;
        service = service.with_location(FixedLocation(coordinate));
    }

    Ok(service)
}

fn catalog_error(err: SearchError) -> Error {
    match err {
        SearchError::Io { source, .. } => {
            Error::from(source).with_suggestion("Check the catalog path")
        }
        SearchError::Catalog(e) => Error::from(e),
        SearchError::DuplicateShopId(_)
        | SearchError::DuplicateProductId { .. }
        | SearchError::InvalidRecord(_) => {
            Error::new(ErrorCode::InvalidCatalogRecord, err.to_string())
        }
        SearchError::InvalidQuery(_) => Error::catalog(err.to_string()),
    }
}
