//! Storage Layer
//!
//! Retention-limited in-memory decision log with repository pattern.

mod repository;

pub use repository::{DecisionRecord, Repository};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Log error: {0}")]
    LogError(String),
    #[error("Record not found")]
    NotFound,
}
