//! Snapshot Range Validation

use crate::error::TelemetryError;
use crate::snapshot::MetricsSnapshot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Latency valid range (ms)
    pub latency_range: (f64, f64),
    /// CPU load valid range (%)
    pub cpu_range: (f64, f64),
    /// Active users valid range
    pub users_range: (u32, u32),
    /// Packet loss valid range (%)
    pub loss_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            latency_range: (0.0, 10_000.0),
            cpu_range: (0.0, 100.0),
            users_range: (0, 1_000_000),
            loss_range: (0.0, 100.0),
        }
    }
}

/// Range validator for metric snapshots
pub struct SnapshotValidator {
    config: ValidationConfig,
}

impl SnapshotValidator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        debug!("Creating snapshot validator with config: {:?}", config);
        Self { config }
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), TelemetryError> {
        if !value.is_finite() {
            return Err(TelemetryError::NotFinite(field));
        }
        if value < range.0 || value > range.1 {
            Err(TelemetryError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate latency
    pub fn validate_latency(&self, latency_ms: f64) -> Result<(), TelemetryError> {
        self.validate_range("latency_ms", latency_ms, self.config.latency_range)
    }

    /// Validate CPU load
    pub fn validate_cpu_load(&self, cpu_load: f64) -> Result<(), TelemetryError> {
        self.validate_range("cpu_load", cpu_load, self.config.cpu_range)
    }

    /// Validate active user count
    pub fn validate_active_users(&self, active_users: u32) -> Result<(), TelemetryError> {
        let (min, max) = self.config.users_range;
        if active_users < min || active_users > max {
            Err(TelemetryError::OutOfRange {
                field: "active_users",
                value: active_users as f64,
                min: min as f64,
                max: max as f64,
            })
        } else {
            Ok(())
        }
    }

    /// Validate packet loss
    pub fn validate_packet_loss(&self, packet_loss: f64) -> Result<(), TelemetryError> {
        self.validate_range("packet_loss", packet_loss, self.config.loss_range)
    }

    /// Validate a whole snapshot, failing on the first out-of-range field
    pub fn validate(&self, snapshot: &MetricsSnapshot) -> Result<(), TelemetryError> {
        self.validate_latency(snapshot.latency_ms)?;
        self.validate_cpu_load(snapshot.cpu_load)?;
        self.validate_active_users(snapshot.active_users)?;
        self.validate_packet_loss(snapshot.packet_loss)?;
        Ok(())
    }
}

impl Default for SnapshotValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
