//! Simulation Runner

use crate::{RecoveryModel, SimulationError};
use advisor::{Advisor, Recommendation};
use arbiter::{Decision, GuardrailPolicy, ProposedAction};
use serde::Serialize;
use telemetry::MetricsSnapshot;
use tracing::{debug, info};

/// Outcome of one simulated time step
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    /// Step index in the trajectory
    pub step: usize,
    /// Metrics the decision was made on
    pub snapshot: MetricsSnapshot,
    /// Advisor recommendation for this step
    pub recommendation: Recommendation,
    /// Arbitrated decision
    pub decision: Decision,
}

/// Trajectory driver: advisor proposes, arbiter decides, recovery mutates
pub struct Simulation {
    trajectory: Vec<MetricsSnapshot>,
    advisor: Advisor,
    policy: GuardrailPolicy,
    recovery: RecoveryModel,
}

impl Simulation {
    /// Create a simulation over a metric trajectory
    pub fn new(
        trajectory: Vec<MetricsSnapshot>,
        advisor: Advisor,
        policy: GuardrailPolicy,
        recovery: RecoveryModel,
    ) -> Self {
        Self {
            trajectory,
            advisor,
            policy,
            recovery,
        }
    }

    /// Run the full trajectory and return the per-step outcome log.
    ///
    /// Each step is evaluated against the snapshot as mutated by earlier
    /// recovery steps, not against the raw input trajectory.
    pub async fn run(mut self) -> Result<Vec<StepOutcome>, SimulationError> {
        if self.trajectory.is_empty() {
            return Err(SimulationError::EmptyTrajectory);
        }

        info!(
            "Running recovery simulation over {} steps",
            self.trajectory.len()
        );

        let mut outcomes = Vec::with_capacity(self.trajectory.len());
        for step in 0..self.trajectory.len() {
            let snapshot = self.trajectory[step];
            let advice = self.advisor.recommend(&snapshot).await;
            let decision = self
                .policy
                .evaluate(advice.recommendation.action, &snapshot);

            // A remediation cools the network down before the next reading
            if decision.final_action != ProposedAction::DoNothing.label() {
                if let Some(next) = self.trajectory.get_mut(step + 1) {
                    self.recovery.apply(next);
                    debug!("Step {}: {} applied, next snapshot relaxed", step, decision.final_action);
                }
            }

            outcomes.push(StepOutcome {
                step,
                snapshot,
                recommendation: advice.recommendation,
                decision,
            });
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor::AdvisorConfig;
    use arbiter::DecisionSource;

    fn snap(latency_ms: f64, cpu_load: f64, active_users: u32, packet_loss: f64) -> MetricsSnapshot {
        MetricsSnapshot {
            latency_ms,
            cpu_load,
            active_users,
            packet_loss,
        }
    }

    fn simulation(trajectory: Vec<MetricsSnapshot>) -> Simulation {
        Simulation::new(
            trajectory,
            Advisor::new(AdvisorConfig::default()).unwrap(),
            GuardrailPolicy::default(),
            RecoveryModel::default(),
        )
    }

    #[tokio::test]
    async fn test_empty_trajectory_is_an_error() {
        let result = simulation(vec![]).run().await;
        assert!(matches!(result, Err(SimulationError::EmptyTrajectory)));
    }

    #[tokio::test]
    async fn test_remediation_relaxes_next_step() {
        // Step 0 degrades hard enough for a restart; step 1 should then be
        // seen at 300 * 0.2 = 60ms and come back as stable.
        let outcomes = simulation(vec![
            snap(400.0, 50.0, 500, 0.5),
            snap(300.0, 80.0, 500, 0.5),
        ])
        .run()
        .await
        .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].decision.final_action, "Restart Router");
        assert_eq!(outcomes[1].snapshot.latency_ms, 60.0);
        assert_eq!(outcomes[1].snapshot.cpu_load, 40.0);
        assert_eq!(outcomes[1].decision.final_action, "Do Nothing");
        assert_eq!(outcomes[1].decision.source, DecisionSource::AiMonitoring);
    }

    #[tokio::test]
    async fn test_override_still_counts_as_remediation() {
        // High user count blocks the restart, but the reroute fallback is
        // itself a remediation, so recovery is still applied.
        let outcomes = simulation(vec![
            snap(400.0, 50.0, 900, 0.5),
            snap(200.0, 90.0, 900, 0.5),
        ])
        .run()
        .await
        .unwrap();

        assert_eq!(outcomes[0].decision.final_action, "Reroute Traffic");
        assert_eq!(outcomes[0].decision.source, DecisionSource::RunbookOverride);
        assert!(outcomes[0].decision.is_blocked());
        assert_eq!(outcomes[1].snapshot.latency_ms, 40.0);
        assert_eq!(outcomes[1].snapshot.cpu_load, 45.0);
    }

    #[tokio::test]
    async fn test_stable_trajectory_never_mutates() {
        let outcomes = simulation(vec![
            snap(30.0, 20.0, 100, 0.0),
            snap(40.0, 30.0, 120, 0.1),
        ])
        .run()
        .await
        .unwrap();

        assert_eq!(outcomes[1].snapshot, snap(40.0, 30.0, 120, 0.1));
        assert!(outcomes.iter().all(|o| o.decision.final_action == "Do Nothing"));
    }

    #[tokio::test]
    async fn test_outcomes_keep_step_order() {
        let outcomes = simulation(vec![
            snap(30.0, 20.0, 100, 0.0),
            snap(400.0, 50.0, 500, 0.5),
            snap(30.0, 20.0, 100, 0.0),
        ])
        .run()
        .await
        .unwrap();

        let steps: Vec<usize> = outcomes.iter().map(|o| o.step).collect();
        assert_eq!(steps, vec![0, 1, 2]);
    }
}
