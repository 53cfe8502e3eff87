//! Route Handlers

pub mod decisions;
pub mod evaluate;
pub mod simulate;

use arbiter::Decision;
use storage::DecisionRecord;
use telemetry::MetricsSnapshot;

/// Flatten one arbitrated decision into a log record
pub(crate) fn to_record(
    timestamp_ms: i64,
    snapshot: &MetricsSnapshot,
    proposed: &str,
    decision: &Decision,
) -> DecisionRecord {
    DecisionRecord {
        id: 0,
        timestamp_ms,
        latency_ms: snapshot.latency_ms,
        cpu_load: snapshot.cpu_load,
        active_users: snapshot.active_users,
        packet_loss: snapshot.packet_loss,
        proposed: proposed.to_string(),
        final_action: decision.final_action.clone(),
        explanation: decision.explanation.clone(),
        source: decision.source.as_str().to_string(),
        blocked: decision.is_blocked(),
    }
}
