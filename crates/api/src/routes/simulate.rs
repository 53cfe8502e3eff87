//! Recovery Simulation Route

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::{epoch_ms, AppState};
use simulation::{RecoveryModel, Simulation, StepOutcome};
use telemetry::RawSnapshot;

/// Request body for a simulation run
#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    /// Metric trajectory; every step must carry all four fields
    pub trajectory: Vec<RawSnapshot>,
}

/// Response for a simulation run
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub steps: Vec<StepOutcome>,
    pub count: usize,
}

/// Run the advisor + arbiter over a whole trajectory
pub async fn post_simulate(
    State(state): State<Arc<RwLock<AppState>>>,
    Json(req): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, (StatusCode, String)> {
    let state = state.read().await;

    let mut trajectory = Vec::with_capacity(req.trajectory.len());
    for raw in req.trajectory {
        let snapshot = raw.complete().map_err(|e| {
            warn!("Rejected simulation request: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        })?;
        state
            .validator
            .validate(&snapshot)
            .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;
        trajectory.push(snapshot);
    }

    let sim = Simulation::new(
        trajectory,
        state.advisor.clone(),
        state.policy.clone(),
        RecoveryModel::default(),
    );

    let steps = sim
        .run()
        .await
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    // The simulated decisions join the log like live ones
    let now = epoch_ms();
    for outcome in &steps {
        state
            .repository
            .insert_decision(super::to_record(
                now,
                &outcome.snapshot,
                outcome.recommendation.action.label(),
                &outcome.decision,
            ))
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    }

    Ok(Json(SimulateResponse {
        count: steps.len(),
        steps,
    }))
}
