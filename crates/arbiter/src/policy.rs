//! Guardrail Policy Evaluation

use crate::action::ProposedAction;
use crate::decision::{Decision, DecisionSource, GUARDRAIL_MARKER};
use serde::{Deserialize, Serialize};
use telemetry::MetricsSnapshot;
use tracing::debug;

/// A single safety rule: a guarded condition over the proposed action and the
/// current metrics, plus the consequence applied when it fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Guardrail {
    /// Block router restarts while too many users are connected
    RestartUnderLoad { max_active_users: u32 },
    /// Block capacity scale-ups while latency is already low
    RedundantScaleUp { min_latency_ms: f64 },
}

impl Guardrail {
    /// Evaluate this rule; `Some(decision)` when it fires
    fn check(&self, proposed: ProposedAction, metrics: &MetricsSnapshot) -> Option<Decision> {
        match *self {
            Guardrail::RestartUnderLoad { max_active_users } => {
                if proposed == ProposedAction::RestartRouter
                    && metrics.active_users > max_active_users
                {
                    Some(Decision {
                        final_action: ProposedAction::RerouteTraffic.label().to_string(),
                        explanation: format!(
                            "{} Cannot restart router; Active Users exceed {}. Fallback to safer Reroute.",
                            GUARDRAIL_MARKER, max_active_users
                        ),
                        source: DecisionSource::RunbookOverride,
                    })
                } else {
                    None
                }
            }
            Guardrail::RedundantScaleUp { min_latency_ms } => {
                if proposed == ProposedAction::ScaleUpCapacity
                    && metrics.latency_ms < min_latency_ms
                {
                    Some(Decision {
                        final_action: ProposedAction::DoNothing.label().to_string(),
                        explanation: format!(
                            "{} Latency is below {:.0}ms; Scale Up is unnecessary. Saving resources.",
                            GUARDRAIL_MARKER, min_latency_ms
                        ),
                        source: DecisionSource::RunbookOverride,
                    })
                } else {
                    None
                }
            }
        }
    }
}

/// Ordered rulebook; the first matching rule wins
#[derive(Debug, Clone)]
pub struct GuardrailPolicy {
    rules: Vec<Guardrail>,
}

impl Default for GuardrailPolicy {
    fn default() -> Self {
        Self {
            rules: vec![
                Guardrail::RestartUnderLoad {
                    max_active_users: 800,
                },
                Guardrail::RedundantScaleUp {
                    min_latency_ms: 150.0,
                },
            ],
        }
    }
}

impl GuardrailPolicy {
    /// Create a policy from an ordered rule list
    pub fn new(rules: Vec<Guardrail>) -> Self {
        Self { rules }
    }

    /// Number of rules in the rulebook
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Reconcile a proposed action against the rulebook.
    ///
    /// Rules are checked in order and the first match wins; when none fires,
    /// a non-idle proposal is confirmed and an idle one stays with
    /// monitoring. Exactly one branch produces the decision, and the
    /// explanation carries [GUARDRAIL TRIGGERED] iff the source is a runbook
    /// override.
    pub fn evaluate(&self, proposed: ProposedAction, metrics: &MetricsSnapshot) -> Decision {
        for rule in &self.rules {
            if let Some(decision) = rule.check(proposed, metrics) {
                debug!(
                    "Guardrail fired for {}: falling back to {}",
                    proposed.label(),
                    decision.final_action
                );
                return decision;
            }
        }

        if proposed.is_remediation() {
            Decision {
                final_action: proposed.label().to_string(),
                explanation: format!(
                    "[APPROVED] AI recommendation confirmed safe. Latency: {}ms.",
                    metrics.latency_ms as i64
                ),
                source: DecisionSource::AiWithRunbook,
            }
        } else {
            Decision {
                final_action: ProposedAction::DoNothing.label().to_string(),
                explanation: "Network stable, monitoring continues.".to_string(),
                source: DecisionSource::AiMonitoring,
            }
        }
    }
}

/// Reconcile a proposed action against the default rulebook
pub fn evaluate(proposed: ProposedAction, metrics: &MetricsSnapshot) -> Decision {
    GuardrailPolicy::default().evaluate(proposed, metrics)
}
