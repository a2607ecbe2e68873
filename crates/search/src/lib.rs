//! Local relevance search for Aroundin.
//!
//! This crate provides:
//! - The shop/product catalog model
//! - Field-weighted relevance scoring
//! - Ranked local search with distances
//! - Browsing filters (all, recommended, by category)
//!
//! # Example
//!
//! ```
//! use aroundin_geo::Coordinate;
//! use aroundin_search::{search_local_data, Catalog};
//!
//! let here = Coordinate::new(-1.2841, 36.8155);
//! for result in search_local_data(Catalog::demo(), "audio", Some(here)) {
//!     println!("{} ({}): {}", result.shop().name, result.formatted_distance, result.relevance_score);
//! }
//! ```

pub mod catalog;
pub mod filter;
mod local;
pub mod relevance;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{Catalog, Product, Shop, ShopCategory};
pub use filter::{filter_shops, filter_shops_with_threshold, ShopFilter, RECOMMENDED_MIN_RATING};
pub use local::{search_local_data, SearchHit, SearchResult};
pub use relevance::{contains_ignore_case, FieldWeight};
pub use error::{SearchError, Result};
