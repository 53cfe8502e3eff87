//! Network Telemetry Model
//!
//! Provides the metric snapshot data model, fallible assembly from partial
//! records, and range validation.

mod error;
mod snapshot;
mod validator;

pub use error::TelemetryError;
pub use snapshot::{MetricsSnapshot, RawSnapshot};
pub use validator::{SnapshotValidator, ValidationConfig};
