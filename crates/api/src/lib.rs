//! Self-Healing Network API Server
//!
//! REST surface for the decision pipeline: one-shot evaluation, decision
//! history, and full recovery-simulation runs.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod routes;
mod settings;

pub use settings::Settings;

use advisor::{Advisor, AdvisorConfig, AdvisorError};
use arbiter::GuardrailPolicy;
use storage::Repository;
use telemetry::SnapshotValidator;

/// Application state shared across handlers
pub struct AppState {
    /// Decision log
    pub repository: Repository,
    /// Safety rulebook
    pub policy: GuardrailPolicy,
    /// Upstream recommender
    pub advisor: Advisor,
    /// Snapshot range validator
    pub validator: SnapshotValidator,
    /// Runtime settings
    pub settings: Settings,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings) -> Result<Self, AdvisorError> {
        Ok(Self {
            repository: Repository::new(),
            policy: GuardrailPolicy::default(),
            advisor: Advisor::new(AdvisorConfig::default())?,
            validator: SnapshotValidator::default(),
            settings,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        })
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub metrics: PipelineMetrics,
}

/// Pipeline counters
#[derive(Debug, Serialize)]
pub struct PipelineMetrics {
    pub decision_count: usize,
    pub blocked_count: usize,
    pub rule_count: usize,
}

/// Create the application router
pub fn create_router(state: Arc<RwLock<AppState>>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/evaluate", post(routes::evaluate::post_evaluate))
        .route("/api/v1/decisions", get(routes::decisions::get_decisions))
        .route("/api/v1/simulate", post(routes::simulate::post_simulate))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<RwLock<AppState>>>) -> impl IntoResponse {
    let state = state.read().await;

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: epoch_ms() as u64 / 1000,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        metrics: PipelineMetrics {
            decision_count: state.repository.decision_count(),
            blocked_count: state.repository.blocked_count(),
            rule_count: state.policy.rule_count(),
        },
    };

    Json(response)
}

/// Milliseconds since the Unix epoch
pub(crate) fn epoch_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let addr = settings.bind_addr.clone();
    let state = Arc::new(RwLock::new(AppState::new(settings)?));
    let app = create_router(state);

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
