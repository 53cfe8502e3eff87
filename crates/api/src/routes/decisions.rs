//! Decision History Routes

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::AppState;
use storage::DecisionRecord;

/// Query parameters for the decisions endpoint
#[derive(Debug, Deserialize)]
pub struct DecisionQuery {
    /// Filter by decision source label
    pub source: Option<String>,
    /// Only blocked (guardrail-overridden) decisions
    #[serde(default)]
    pub blocked: bool,
    /// Maximum number of records
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

/// Response for the decisions endpoint
#[derive(Debug, Serialize)]
pub struct DecisionResponse {
    pub data: Vec<DecisionRecord>,
    pub count: usize,
}

/// Get decision history, newest first
pub async fn get_decisions(
    State(state): State<Arc<RwLock<AppState>>>,
    Query(params): Query<DecisionQuery>,
) -> Json<DecisionResponse> {
    let state = state.read().await;
    let limit = params.limit.min(state.settings.history_limit);

    let data = if params.blocked {
        state.repository.get_blocked(limit)
    } else {
        state.repository.get_decisions(params.source.as_deref(), limit)
    }
    .unwrap_or_default();

    Json(DecisionResponse {
        count: data.len(),
        data,
    })
}
