//! Remediation Advisor
//!
//! Threshold-based recommendation engine. Stands in for the trained
//! classifier upstream of the arbiter: it proposes a remediation action from
//! one metric snapshot, with a confidence score and per-class probabilities.

mod engine;

pub use engine::{Advice, Advisor, AdvisorConfig, Recommendation};

use thiserror::Error;

/// Errors during advisor construction
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Invalid advisor config: {0}")]
    Config(String),
}
