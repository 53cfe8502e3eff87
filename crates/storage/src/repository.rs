//! Repository Implementation

use crate::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use tracing::{debug, info};

/// One arbitrated decision, flattened for the log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub id: i64,
    pub timestamp_ms: i64,
    pub latency_ms: f64,
    pub cpu_load: f64,
    pub active_users: u32,
    pub packet_loss: f64,
    pub proposed: String,
    pub final_action: String,
    pub explanation: String,
    pub source: String,
    pub blocked: bool,
}

/// Repository for decision records (in-memory)
pub struct Repository {
    /// Decision records, oldest first
    decisions: Mutex<VecDeque<DecisionRecord>>,
    /// Max decision records kept
    max_decision_records: usize,
    /// Next decision ID
    next_decision_id: Mutex<i64>,
}

impl Repository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        info!("Creating in-memory decision repository");
        Self {
            decisions: Mutex::new(VecDeque::with_capacity(1000)),
            max_decision_records: 10_000,
            next_decision_id: Mutex::new(1),
        }
    }

    /// Insert a decision record, returning its assigned id
    pub fn insert_decision(&self, mut record: DecisionRecord) -> Result<i64, StorageError> {
        let mut decisions = self
            .decisions
            .lock()
            .map_err(|e| StorageError::LogError(format!("Lock error: {}", e)))?;

        let mut id = self
            .next_decision_id
            .lock()
            .map_err(|e| StorageError::LogError(format!("Lock error: {}", e)))?;

        record.id = *id;
        *id += 1;

        // Enforce retention
        while decisions.len() >= self.max_decision_records {
            decisions.pop_front();
        }

        let returned_id = record.id;
        decisions.push_back(record);
        debug!("Inserted decision with ID {}", returned_id);

        Ok(returned_id)
    }

    /// Get decision records, newest first, optionally filtered by source label
    pub fn get_decisions(
        &self,
        source: Option<&str>,
        limit: usize,
    ) -> Result<Vec<DecisionRecord>, StorageError> {
        let decisions = self
            .decisions
            .lock()
            .map_err(|e| StorageError::LogError(format!("Lock error: {}", e)))?;

        Ok(decisions
            .iter()
            .rev()
            .filter(|d| source.map_or(true, |s| d.source == s))
            .take(limit)
            .cloned()
            .collect())
    }

    /// Get blocked decisions, newest first
    pub fn get_blocked(&self, limit: usize) -> Result<Vec<DecisionRecord>, StorageError> {
        let decisions = self
            .decisions
            .lock()
            .map_err(|e| StorageError::LogError(format!("Lock error: {}", e)))?;

        Ok(decisions
            .iter()
            .rev()
            .filter(|d| d.blocked)
            .take(limit)
            .cloned()
            .collect())
    }

    /// Get total decision count
    pub fn decision_count(&self) -> usize {
        self.decisions.lock().map(|d| d.len()).unwrap_or(0)
    }

    /// Get count of blocked decisions
    pub fn blocked_count(&self) -> usize {
        self.decisions
            .lock()
            .map(|d| d.iter().filter(|r| r.blocked).count())
            .unwrap_or(0)
    }

    /// Clear all data (for testing)
    pub fn clear(&self) {
        if let Ok(mut decisions) = self.decisions.lock() {
            decisions.clear();
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(source: &str, blocked: bool) -> DecisionRecord {
        DecisionRecord {
            id: 0,
            timestamp_ms: 1_700_000_000_000,
            latency_ms: 220.0,
            cpu_load: 60.0,
            active_users: 900,
            packet_loss: 1.0,
            proposed: "Restart Router".to_string(),
            final_action: "Reroute Traffic".to_string(),
            explanation: "[GUARDRAIL TRIGGERED] Cannot restart router.".to_string(),
            source: source.to_string(),
            blocked,
        }
    }

    #[test]
    fn test_insert_assigns_ids() {
        let repo = Repository::new();

        let first = repo.insert_decision(record("Runbook Override", true)).unwrap();
        let second = repo.insert_decision(record("Runbook Override", true)).unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(repo.decision_count(), 2);
    }

    #[test]
    fn test_get_decisions_newest_first_with_filter() {
        let repo = Repository::new();
        repo.insert_decision(record("Runbook Override", true)).unwrap();
        repo.insert_decision(record("AI + Runbook Confirmation", false))
            .unwrap();
        repo.insert_decision(record("Runbook Override", true)).unwrap();

        let all = repo.get_decisions(None, 10).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, 3);

        let overrides = repo.get_decisions(Some("Runbook Override"), 10).unwrap();
        assert_eq!(overrides.len(), 2);
        assert!(overrides.iter().all(|d| d.source == "Runbook Override"));
    }

    #[test]
    fn test_blocked_queries() {
        let repo = Repository::new();
        repo.insert_decision(record("Runbook Override", true)).unwrap();
        repo.insert_decision(record("AI-Driven Monitoring", false))
            .unwrap();

        assert_eq!(repo.blocked_count(), 1);
        assert_eq!(repo.get_blocked(10).unwrap().len(), 1);
    }

    #[test]
    fn test_retention_limit() {
        let mut repo = Repository::new();
        repo.max_decision_records = 5;

        for _ in 0..10 {
            repo.insert_decision(record("AI-Driven Monitoring", false))
                .unwrap();
        }

        assert_eq!(repo.decision_count(), 5);
        // Oldest records were dropped, newest survive
        let kept = repo.get_decisions(None, 10).unwrap();
        assert_eq!(kept[0].id, 10);
        assert_eq!(kept[4].id, 6);
    }
}
