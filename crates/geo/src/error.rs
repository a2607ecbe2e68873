//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Invalid coordinate values
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// Error code for integration with aroundin-core error handling.
/// Matches the 5xxx location range of `aroundin_core::ErrorCode`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid coordinate values
    InvalidCoordinate = 5001,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = GeoError::InvalidCoordinate("lat 100".into());
        assert_eq!(err.code(), GeoErrorCode::InvalidCoordinate);
        assert_eq!(err.code() as u32, 5001);
        assert_eq!(err.to_string(), "Invalid coordinate: lat 100");
    }
}
