//! Recovery Mutation Model

use serde::{Deserialize, Serialize};
use telemetry::MetricsSnapshot;

/// Fixed mutation applied to the snapshot after a remediation step.
///
/// Latency and CPU load are scaled down and floored; users and packet loss
/// are left to the trajectory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RecoveryModel {
    /// Multiplier applied to the next step's latency
    pub latency_factor: f64,
    /// Lower bound for post-recovery latency (ms)
    pub latency_floor_ms: f64,
    /// Multiplier applied to the next step's CPU load
    pub cpu_factor: f64,
    /// Lower bound for post-recovery CPU load (%)
    pub cpu_floor: f64,
}

impl Default for RecoveryModel {
    fn default() -> Self {
        Self {
            latency_factor: 0.2,
            latency_floor_ms: 20.0,
            cpu_factor: 0.5,
            cpu_floor: 25.0,
        }
    }
}

impl RecoveryModel {
    /// Apply the recovery mutation to the next snapshot in the trajectory
    pub fn apply(&self, next: &mut MetricsSnapshot) {
        next.latency_ms = (next.latency_ms * self.latency_factor).max(self.latency_floor_ms);
        next.cpu_load = (next.cpu_load * self.cpu_factor).max(self.cpu_floor);
    }
}
