//! WASM bindings for the geo crate.
//!
//! These bindings allow the geo crate to be used from JavaScript/TypeScript
//! in the browser front end.

use crate::{format_distance, haversine_distance_meters, Coordinate};
use wasm_bindgen::prelude::*;

/// Calculate distance between two coordinates.
///
/// # Returns
/// Distance in meters
#[wasm_bindgen]
pub fn distance_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let from = Coordinate::new(lat1, lng1);
    let to = Coordinate::new(lat2, lng2);
    haversine_distance_meters(&from, &to)
}

/// Format a distance in meters as `950m` or `1.2km`.
#[wasm_bindgen(js_name = formatDistance)]
pub fn format_distance_js(meters: f64) -> String {
    format_distance(meters)
}

/// Distance label between two coordinates, ready for display.
#[wasm_bindgen]
pub fn distance_label(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> String {
    format_distance(distance_meters(lat1, lng1, lat2, lng2))
}
