mod job;
mod orchestrator;
mod worker;

pub use job::{JobStatus, SyncJob};
pub use orchestrator::{SyncOrchestrator, SyncSettings};
pub use worker::{Outcome, SyncItemError};
