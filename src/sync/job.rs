use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a sync job.
///
/// Status only ever moves forward: pending → in_progress → (completed|failed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl JobStatus {
    /// Completed and failed jobs are immutable.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    fn rank(self) -> u8 {
        match self {
            JobStatus::Pending => 0,
            JobStatus::InProgress => 1,
            JobStatus::Completed | JobStatus::Failed => 2,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::InProgress => write!(f, "in_progress"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One recipe-sync attempt, tracked through the status state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncJob {
    pub id: Uuid,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    /// `None` until the first status transition is persisted.
    pub updated_at: Option<DateTime<Utc>>,
}

impl SyncJob {
    pub fn new(status: JobStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            status,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Advance the in-memory status, refusing any backward or post-terminal
    /// move. Returns whether the transition was applied.
    pub fn advance(&mut self, next: JobStatus) -> bool {
        if self.status.is_terminal() || next.rank() <= self.status.rank() {
            return false;
        }
        self.status = next;
        true
    }
}
