//! Requester location providers.
//!
//! Search works with or without a requester coordinate. A provider answers
//! "where is the customer right now", and `None` means the position is
//! unknown (permission denied, not requested, or no fix yet).

use crate::Coordinate;

/// Source of the requester's current position.
pub trait LocationProvider {
    /// Returns the current coordinate, or `None` when unavailable.
    fn current_location(&self) -> Option<Coordinate>;
}

/// Provider that never reports a position.
///
/// This is the default for discovery: the customer is never prompted for
/// location access, so distances fall back to each shop's static label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current_location(&self) -> Option<Coordinate> {
        None
    }
}

/// Provider pinned to a single known coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coordinate);

impl FixedLocation {
    /// Creates a provider for the given position.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self(Coordinate::new(latitude, longitude))
    }
}

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> Option<Coordinate> {
        Some(self.0)
    }
}

impl LocationProvider for Option<Coordinate> {
    fn current_location(&self) -> Option<Coordinate> {
        *self
    }
}

impl<T: LocationProvider + ?Sized> LocationProvider for &T {
    fn current_location(&self) -> Option<Coordinate> {
        (**self).current_location()
    }
}

impl<T: LocationProvider + ?Sized> LocationProvider for Box<T> {
    fn current_location(&self) -> Option<Coordinate> {
        (**self).current_location()
    }
}
