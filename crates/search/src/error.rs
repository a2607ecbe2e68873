//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while loading catalogs or parsing search input.
///
/// Searching itself never fails.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid query or filter input
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Catalog JSON could not be parsed
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Two shops share an id
    #[error("Duplicate shop id: {0}")]
    DuplicateShopId(String),

    /// Two products of one shop share an id
    #[error("Duplicate product id {product} in shop {shop}")]
    DuplicateProductId {
        /// Owning shop id
        shop: String,
        /// Repeated product id
        product: String,
    },

    /// A record has out-of-range values
    #[error("Invalid catalog record: {0}")]
    InvalidRecord(String),
}
