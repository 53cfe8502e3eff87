//! Metric Snapshot Types

use crate::error::TelemetryError;
use serde::{Deserialize, Serialize};

/// One instant of network telemetry readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Round-trip latency (ms)
    pub latency_ms: f64,
    /// CPU load (%)
    pub cpu_load: f64,
    /// Concurrent active users
    pub active_users: u32,
    /// Packet loss (%)
    pub packet_loss: f64,
}

/// Snapshot as read from loose input; every field may be absent
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RawSnapshot {
    pub latency_ms: Option<f64>,
    pub cpu_load: Option<f64>,
    pub active_users: Option<u32>,
    pub packet_loss: Option<f64>,
}

impl RawSnapshot {
    /// Assemble a complete snapshot, failing fast on the first absent field.
    ///
    /// Fields are checked in declaration order; no defaulting.
    pub fn complete(self) -> Result<MetricsSnapshot, TelemetryError> {
        Ok(MetricsSnapshot {
            latency_ms: self
                .latency_ms
                .ok_or(TelemetryError::MissingField("Latency"))?,
            cpu_load: self
                .cpu_load
                .ok_or(TelemetryError::MissingField("CPU_Load"))?,
            active_users: self
                .active_users
                .ok_or(TelemetryError::MissingField("Active_Users"))?,
            packet_loss: self
                .packet_loss
                .ok_or(TelemetryError::MissingField("Packet_Loss"))?,
        })
    }
}

impl From<MetricsSnapshot> for RawSnapshot {
    fn from(snapshot: MetricsSnapshot) -> Self {
        Self {
            latency_ms: Some(snapshot.latency_ms),
            cpu_load: Some(snapshot.cpu_load),
            active_users: Some(snapshot.active_users),
            packet_loss: Some(snapshot.packet_loss),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_with_all_fields() {
        let raw = RawSnapshot {
            latency_ms: Some(220.0),
            cpu_load: Some(60.0),
            active_users: Some(900),
            packet_loss: Some(1.0),
        };

        let snapshot = raw.complete().unwrap();
        assert_eq!(snapshot.latency_ms, 220.0);
        assert_eq!(snapshot.active_users, 900);
    }

    #[test]
    fn test_missing_field_fails_fast() {
        let raw = RawSnapshot {
            latency_ms: Some(220.0),
            cpu_load: None,
            active_users: Some(900),
            packet_loss: Some(1.0),
        };

        let err = raw.complete().unwrap_err();
        assert!(matches!(err, TelemetryError::MissingField("CPU_Load")));
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let err = RawSnapshot::default().complete().unwrap_err();
        assert!(matches!(err, TelemetryError::MissingField("Latency")));
    }

    #[test]
    fn test_raw_roundtrip_from_snapshot() {
        let snapshot = MetricsSnapshot {
            latency_ms: 90.0,
            cpu_load: 95.0,
            active_users: 300,
            packet_loss: 0.1,
        };

        let raw: RawSnapshot = snapshot.into();
        assert_eq!(raw.complete().unwrap(), snapshot);
    }

    #[test]
    fn test_raw_deserializes_with_absent_fields() {
        let raw: RawSnapshot = serde_json::from_str(r#"{"latency_ms": 30.0}"#).unwrap();
        assert_eq!(raw.latency_ms, Some(30.0));
        assert!(raw.cpu_load.is_none());
    }
}
