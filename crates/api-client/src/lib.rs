//! Grounded place search for Aroundin
//!
//! Local search answers from the Aroundin catalog; this crate asks a
//! generative model, grounded on Google Maps, about places around the
//! customer. Callers treat it as optional augmentation.
//!
//! # Example
//!
//! ```rust,no_run
//! use aroundin_api_client::GroundedSearchClient;
//! use aroundin_geo::Coordinate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GroundedSearchClient::new()?;
//!
//!     let answer = client
//!         .find_nearby_places("phone repair", Coordinate::new(-1.2841, 36.8155))
//!         .await?;
//!     println!("{}", answer.text);
//!     for source in &answer.sources {
//!         println!("- {} ({})", source.title, source.uri);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod places;

pub use client::GroundedSearchClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use places::{PlaceSource, PlacesAnswer, ReviewSnippet};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::GroundedSearchClient;
    pub use crate::config::ClientConfig;
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::places::{PlaceSource, PlacesAnswer};
}
