//! Customer discovery for Aroundin
//!
//! Combines ranked local search over the shop catalog with an optional
//! grounded place search around the customer. Local results never wait on,
//! or fail because of, the external search.
//!
//! # Example
//!
//! ```rust,no_run
//! use aroundin_core::config::Config;
//! use aroundin_discovery::{from_config, load_catalog};
//!
//! #[tokio::main]
//! async fn main() -> aroundin_core::Result<()> {
//!     let config = Config::load(None)?;
//!     let service = from_config(load_catalog(None)?, &config)?;
//!
//!     let results = service.search("phone repair").await;
//!     for result in &results.local_results {
//!         println!("{} {}", result.shop().name, result.formatted_distance);
//!     }
//!     if let Some(answer) = &results.external {
//!         println!("{}", answer.text);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

mod external;
mod service;
mod setup;

pub use external::ExternalSearch;
pub use service::{DiscoveryResults, DiscoveryService, LocalOnly};
pub use setup::{from_config, from_schema, load_catalog};
