//! Human-readable distance labels.

/// Formats a distance in meters for display.
///
/// Distances under one kilometer render as whole meters (`950m`); anything
/// else renders as kilometers with exactly one decimal place (`1.2km`).
/// Decimal ties round up, so `1250` meters is `1.3km`.
///
/// # Example
/// ```
/// use aroundin_geo::format_distance;
///
/// assert_eq!(format_distance(999.0), "999m");
/// assert_eq!(format_distance(1000.0), "1.0km");
/// assert_eq!(format_distance(1500.0), "1.5km");
/// ```
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = meters.round() as i64;
        format!("{whole}m")
    } else {
        format!("{}km", one_decimal(meters / 1000.0))
    }
}

/// Renders `value` with one decimal, rounding exact ties away from zero.
///
/// `{:.1}` rounds exact binary ties to even; the only such ties at one
/// decimal are odd multiples of 0.25.
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", value + value.signum() * 0.05)
    } else {
        format!("{value:.1}")
    }
}
