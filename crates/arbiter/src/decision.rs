//! Decision Output Types

use serde::{Deserialize, Serialize};

/// Literal marker present in an explanation iff the decision was a runbook
/// override. Downstream consumers pattern-match on it to classify a decision
/// as blocked vs. approved, so it must stay byte-for-byte stable.
pub const GUARDRAIL_MARKER: &str = "[GUARDRAIL TRIGGERED]";

/// Authority that produced the final action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionSource {
    /// Model proposed no intervention; monitoring alone
    #[serde(rename = "AI-Driven Monitoring")]
    AiMonitoring,
    /// Model recommendation confirmed by the rulebook
    #[serde(rename = "AI + Runbook Confirmation")]
    AiWithRunbook,
    /// Rulebook overrode the model
    #[serde(rename = "Runbook Override")]
    RunbookOverride,
}

impl DecisionSource {
    /// Attribution label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiMonitoring => "AI-Driven Monitoring",
            Self::AiWithRunbook => "AI + Runbook Confirmation",
            Self::RunbookOverride => "Runbook Override",
        }
    }
}

/// Final reconciled decision for one (action, snapshot) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Label of the action to carry out
    pub final_action: String,
    /// Human-readable rationale
    pub explanation: String,
    /// Authority attribution
    pub source: DecisionSource,
}

impl Decision {
    /// Whether the proposed action was blocked by a guardrail
    pub fn is_blocked(&self) -> bool {
        self.explanation.contains(GUARDRAIL_MARKER)
    }
}
