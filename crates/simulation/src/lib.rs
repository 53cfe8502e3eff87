//! Recovery Simulation
//!
//! Drives a metric trajectory through the advisor and the arbiter one step
//! at a time, applying the fixed recovery mutation to the following snapshot
//! whenever a step ends in a remediation.

mod recovery;
mod runner;

pub use recovery::RecoveryModel;
pub use runner::{Simulation, StepOutcome};

use thiserror::Error;

/// Simulation error types
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Trajectory is empty")]
    EmptyTrajectory,
}
