//! Advisor Engine Implementation

use crate::AdvisorError;
use arbiter::ProposedAction;
use serde::{Deserialize, Serialize};
use telemetry::MetricsSnapshot;
use tracing::{debug, info};

/// Thresholds for the recommendation engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// CPU load above which extra capacity is proposed (%)
    pub scale_up_cpu: f64,
    /// Latency above which a router restart is proposed (ms)
    pub restart_latency_ms: f64,
    /// Packet loss above which a router restart is proposed (%)
    pub restart_packet_loss: f64,
    /// Latency above which a reroute is proposed (ms)
    pub reroute_latency_ms: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            scale_up_cpu: 85.0,
            restart_latency_ms: 200.0,
            restart_packet_loss: 2.0,
            reroute_latency_ms: 100.0,
        }
    }
}

/// Recommendation produced by the advisor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Proposed action
    pub action: ProposedAction,
    /// Confidence score (0.0 to 1.0)
    pub confidence: f64,
    /// Probabilities for each action class (Do Nothing, Reroute, Restart, Scale Up)
    pub probabilities: [f64; 4],
    /// Timestamp when the recommendation was made
    pub timestamp_ms: u64,
}

/// Result of a recommendation pass
#[derive(Debug, Clone)]
pub struct Advice {
    /// The recommendation
    pub recommendation: Recommendation,
    /// Recommendation latency in milliseconds
    pub latency_ms: u64,
}

/// Threshold recommender over metric snapshots
#[derive(Debug, Clone)]
pub struct Advisor {
    config: AdvisorConfig,
}

impl Advisor {
    /// Create a new advisor, rejecting inconsistent thresholds
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        if !(0.0..=100.0).contains(&config.scale_up_cpu) {
            return Err(AdvisorError::Config(format!(
                "scale_up_cpu {} must be a percentage",
                config.scale_up_cpu
            )));
        }
        if config.reroute_latency_ms >= config.restart_latency_ms {
            return Err(AdvisorError::Config(format!(
                "reroute threshold {}ms must be below restart threshold {}ms",
                config.reroute_latency_ms, config.restart_latency_ms
            )));
        }

        info!("Creating advisor with config: {:?}", config);
        Ok(Self { config })
    }

    /// Propose a remediation action for one snapshot
    pub async fn recommend(&self, metrics: &MetricsSnapshot) -> Advice {
        let start = std::time::Instant::now();
        let recommendation = self.classify(metrics);
        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(
            "Recommendation {} ({:.2}) in {}ms",
            recommendation.action.label(),
            recommendation.confidence,
            latency_ms
        );

        Advice {
            recommendation,
            latency_ms,
        }
    }

    /// Threshold dispatch over the four metric channels
    fn classify(&self, metrics: &MetricsSnapshot) -> Recommendation {
        let timestamp_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let (action, confidence) = if metrics.cpu_load > self.config.scale_up_cpu {
            // Saturated CPU wants extra capacity
            let conf = ((metrics.cpu_load - self.config.scale_up_cpu)
                / (100.0 - self.config.scale_up_cpu))
                .clamp(0.5, 0.99);
            (ProposedAction::ScaleUpCapacity, conf)
        } else if metrics.latency_ms > self.config.restart_latency_ms
            || metrics.packet_loss > self.config.restart_packet_loss
        {
            // Severe degradation takes the aggressive fix
            let conf = (metrics.latency_ms / (2.0 * self.config.restart_latency_ms))
                .clamp(0.5, 0.95);
            (ProposedAction::RestartRouter, conf)
        } else if metrics.latency_ms > self.config.reroute_latency_ms {
            // Mild degradation takes the gentle fix
            let conf = (metrics.latency_ms / (2.0 * self.config.reroute_latency_ms))
                .clamp(0.5, 0.9);
            (ProposedAction::RerouteTraffic, conf)
        } else {
            (ProposedAction::DoNothing, 0.95)
        };

        Recommendation {
            action,
            confidence,
            probabilities: Self::spread(action, confidence),
            timestamp_ms,
        }
    }

    /// Concentrate the confidence mass on the winning class
    fn spread(action: ProposedAction, confidence: f64) -> [f64; 4] {
        let rest = (1.0 - confidence) / 3.0;
        let mut probabilities = [rest; 4];
        probabilities[action.id().min(3) as usize] = confidence;
        probabilities
    }
}
