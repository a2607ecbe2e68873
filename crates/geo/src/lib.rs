//! Geospatial utilities for Aroundin.
//!
//! This crate provides:
//! - Haversine great-circle distances
//! - Human-readable distance labels (`950m`, `1.2km`)
//! - Location providers that yield the requester's position, if known
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use aroundin_geo::{format_distance, haversine_distance_meters, Coordinate};
//!
//! let shop = Coordinate::new(-1.2921, 36.8219);
//! let customer = Coordinate::new(-1.2841, 36.8155);
//!
//! let meters = haversine_distance_meters(&customer, &shop);
//! assert!(format_distance(meters).ends_with('m'));
//! ```

mod error;
mod format;
mod haversine;
pub mod location;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{GeoError, Result};
pub use format::format_distance;
pub use haversine::{haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM};
pub use location::{FixedLocation, LocationProvider, NoLocation};

/// A geographic coordinate with latitude and longitude.
///
/// Values are not range-checked on construction; use [`Coordinate::is_valid`]
/// or [`Coordinate::try_new`] when the source is untrusted.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate, rejecting out-of-range or non-finite values.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let coord = Self::new(latitude, longitude);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "latitude {latitude}, longitude {longitude} out of range"
            )))
        }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
