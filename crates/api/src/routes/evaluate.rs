//! One-Shot Evaluation Route

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::{epoch_ms, AppState};
use arbiter::{Decision, ProposedAction};
use telemetry::RawSnapshot;

/// Request body for one-shot evaluation
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    /// Classifier output id (0-3; unknown ids degrade to "Unknown Action")
    pub proposed_id: u8,
    /// Current metric readings; all four fields are required
    pub metrics: RawSnapshot,
}

/// Response for one-shot evaluation
#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub proposed: String,
    pub decision: Decision,
    pub blocked: bool,
}

/// Evaluate one (action, snapshot) pair and record the decision
pub async fn post_evaluate(
    State(state): State<Arc<RwLock<AppState>>>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, (StatusCode, String)> {
    let snapshot = req.metrics.complete().map_err(|e| {
        warn!("Rejected evaluation request: {}", e);
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    let state = state.read().await;

    state.validator.validate(&snapshot).map_err(|e| {
        warn!("Rejected evaluation request: {}", e);
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    let proposed = ProposedAction::from_id(req.proposed_id);
    let decision = state.policy.evaluate(proposed, &snapshot);
    let blocked = decision.is_blocked();

    state
        .repository
        .insert_decision(super::to_record(
            epoch_ms(),
            &snapshot,
            proposed.label(),
            &decision,
        ))
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(EvaluateResponse {
        proposed: proposed.label().to_string(),
        decision,
        blocked,
    }))
}
