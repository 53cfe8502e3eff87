//! Telemetry Error Types

use thiserror::Error;

/// Errors during snapshot assembly and validation
#[derive(Debug, Clone, Error)]
pub enum TelemetryError {
    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Value is NaN or infinite
    #[error("{0} value is not a finite number")]
    NotFinite(&'static str),
}
