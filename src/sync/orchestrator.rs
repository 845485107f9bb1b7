use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::{sleep, timeout_at, Instant};
use tracing::{error, info, warn};

use crate::extraction::Extractor;
use crate::store::SyncStore;

use super::job::{JobStatus, SyncJob};
use super::worker::{sync_one, Outcome};

/// Tunables for one sync pass.
#[derive(Debug, Clone)]
pub struct SyncSettings {
    /// Wall-clock bound on the whole collection phase.
    pub collection_timeout: Duration,
    /// Fixed delay between worker launches. A soft throttle for the
    /// extraction endpoint, not a correctness mechanism.
    pub launch_stagger: Duration,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            collection_timeout: Duration::from_secs(900),
            launch_stagger: Duration::from_millis(2000),
        }
    }
}

/// Owns the sync job lifecycle: creates the job record, fans workers out,
/// collects their outcomes against a global deadline and drives status
/// transitions.
#[derive(Clone)]
pub struct SyncOrchestrator {
    store: Arc<dyn SyncStore>,
    extractor: Arc<dyn Extractor>,
    settings: SyncSettings,
}

impl SyncOrchestrator {
    pub fn new(
        store: Arc<dyn SyncStore>,
        extractor: Arc<dyn Extractor>,
        settings: SyncSettings,
    ) -> Self {
        Self {
            store,
            extractor,
            settings,
        }
    }

    /// Create a pending job, persist it and begin processing in the
    /// background. Returns as soon as the job record is durable; callers
    /// poll the job status separately.
    ///
    /// Fails only if the initial persistence fails, in which case no
    /// workers are launched.
    pub async fn start_sync(&self) -> Result<SyncJob> {
        let job = self.store.create_job(JobStatus::Pending).await?;
        info!(job_id = %job.id, "sync job created");

        let driver = self.clone();
        let spawned = job.clone();
        tokio::spawn(async move {
            driver.run_sync(spawned).await;
        });

        Ok(job)
    }

    async fn run_sync(self, mut job: SyncJob) {
        self.advance_job(&mut job, JobStatus::InProgress).await;

        let recipes = match self.store.load_all_recipes().await {
            Ok(recipes) => recipes,
            Err(err) => {
                error!(job_id = %job.id, "failed to load recipes: {err:#}");
                self.advance_job(&mut job, JobStatus::Failed).await;
                return;
            }
        };

        // One deadline for the entire pass, armed before any worker starts.
        let deadline = Instant::now() + self.settings.collection_timeout;

        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<Outcome>();
        let mut launched = 0usize;

        for recipe in recipes {
            // Recipes without a source document are not syncable.
            if recipe.source_document_path.is_none() {
                continue;
            }

            sleep(self.settings.launch_stagger).await;

            let extractor = Arc::clone(&self.extractor);
            let tx = outcome_tx.clone();
            tokio::spawn(async move {
                let outcome = sync_one(recipe, extractor.as_ref()).await;
                // The worker reports exactly once on every exit path. A
                // closed channel means collection already gave up on us.
                let _ = tx.send(outcome);
            });
            launched += 1;
        }
        drop(outcome_tx);

        info!(job_id = %job.id, launched, "collecting sync outcomes");

        let mut drained = 0usize;
        while drained < launched {
            match timeout_at(deadline, outcome_rx.recv()).await {
                Ok(Some(Outcome::Updated(recipe))) => {
                    drained += 1;
                    if let Err(err) = self.store.upsert_recipe(&recipe).await {
                        error!(recipe_id = recipe.id, "failed to persist synced recipe: {err:#}");
                        // The verdict is now negative, but keep draining so
                        // no worker outcome is left dangling.
                        if job.status != JobStatus::Failed {
                            self.advance_job(&mut job, JobStatus::Failed).await;
                        }
                    }
                }
                Ok(Some(Outcome::Failed { recipe_id, .. })) => {
                    // Already logged by the worker; a single item failure
                    // does not fail the job.
                    drained += 1;
                    warn!(job_id = %job.id, recipe_id, "recipe left unchanged");
                }
                Ok(None) => {
                    error!(job_id = %job.id, drained, launched, "a worker exited without reporting");
                    self.advance_job(&mut job, JobStatus::Failed).await;
                    break;
                }
                Err(_) => {
                    error!(
                        job_id = %job.id,
                        drained,
                        launched,
                        "sync timed out after {}s",
                        self.settings.collection_timeout.as_secs()
                    );
                    // Stragglers are abandoned, not awaited; their outcomes
                    // no longer count toward this job.
                    self.advance_job(&mut job, JobStatus::Failed).await;
                    return;
                }
            }
        }

        if !job.status.is_terminal() {
            self.advance_job(&mut job, JobStatus::Completed).await;
        }
        info!(job_id = %job.id, status = %job.status, "sync job finished");
    }

    /// Apply a status transition and best-effort persist it. A refused
    /// transition or a failed write is logged and never retried; the
    /// in-memory verdict stands.
    async fn advance_job(&self, job: &mut SyncJob, status: JobStatus) {
        if !job.advance(status) {
            warn!(job_id = %job.id, current = %job.status, "refusing status transition to {status}");
            return;
        }
        if let Err(err) = self.store.update_job(job).await {
            error!(job_id = %job.id, "failed to update job status: {err:#}");
        }
    }
}
