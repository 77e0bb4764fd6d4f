//! Run lifecycle controller.
//!
//! Transitions:
//!
//! ```text
//! idle / completed / error --start--> running --(delay)--> completed
//!                                     running --stop-----> idle
//! ```
//!
//! Starting while running is rejected. Stopping is always accepted.
//!
//! The delayed completion runs as a spawned task. The controller keeps its
//! handle in a slot guarded by an async mutex, tagged with a generation
//! number. `stop` aborts the task, and a task only applies `completed` if it
//! still owns the slot when it wakes, so a completion can never overwrite a
//! later stop or a newer run.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::run::{RunAck, RunConfig, RunStatus, StopAck};
use crate::store::DataStore;

/// Delay between starting a run and its automatic completion.
pub const DEFAULT_COMPLETION_DELAY: Duration = Duration::from_millis(3000);

struct PendingCompletion {
    generation: u64,
    handle: JoinHandle<()>,
}

#[derive(Default)]
struct CompletionSlot {
    next_generation: u64,
    pending: Option<PendingCompletion>,
}

/// Drives the simulated VQE run through its lifecycle.
pub struct RunController {
    store: Arc<dyn DataStore>,
    completion_delay: Duration,
    slot: Arc<Mutex<CompletionSlot>>,
}

impl RunController {
    /// Create a controller with the default completion delay.
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self::with_delay(store, DEFAULT_COMPLETION_DELAY)
    }

    /// Create a controller with a custom completion delay.
    pub fn with_delay(store: Arc<dyn DataStore>, completion_delay: Duration) -> Self {
        Self {
            store,
            completion_delay,
            slot: Arc::new(Mutex::new(CompletionSlot::default())),
        }
    }

    /// The store this controller drives.
    pub fn store(&self) -> &Arc<dyn DataStore> {
        &self.store
    }

    /// Configured completion delay.
    pub fn completion_delay(&self) -> Duration {
        self.completion_delay
    }

    /// Current run status.
    pub async fn status(&self) -> CoreResult<RunStatus> {
        self.store.run_status().await
    }

    /// Whether an automatic completion is scheduled.
    pub async fn has_pending_completion(&self) -> bool {
        self.slot.lock().await.pending.is_some()
    }

    /// Start a run.
    ///
    /// Fails with [`CoreError::Validation`] if the configuration is out of
    /// range and with [`CoreError::RunInProgress`] if a run is already
    /// running. Neither failure changes any state.
    pub async fn start_run(&self, config: RunConfig) -> CoreResult<RunAck> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "Rejected VQE run configuration");
            return Err(e);
        }

        let mut slot = self.slot.lock().await;

        if self.store.run_status().await?.is_running() {
            warn!("VQE run requested while another run is in progress");
            return Err(CoreError::RunInProgress);
        }

        self.store.set_run_status(RunStatus::Running).await?;

        if let Some(stale) = slot.pending.take() {
            stale.handle.abort();
        }
        slot.next_generation += 1;
        let generation = slot.next_generation;
        let handle = tokio::spawn(complete_after(
            Arc::clone(&self.store),
            Arc::clone(&self.slot),
            self.completion_delay,
            generation,
        ));
        slot.pending = Some(PendingCompletion { generation, handle });

        let ack = RunAck::started(config);
        info!(
            run_id = %ack.run_id,
            ansatz = %ack.config.ansatz_id,
            optimizer = %ack.config.optimizer_id,
            layers = ack.config.layer_count,
            step_size = ack.config.step_size,
            "VQE run started"
        );
        Ok(ack)
    }

    /// Stop the current run, if any, and return to idle.
    pub async fn stop_run(&self) -> CoreResult<StopAck> {
        let mut slot = self.slot.lock().await;

        if let Some(pending) = slot.pending.take() {
            pending.handle.abort();
            debug!(generation = pending.generation, "Cancelled pending run completion");
        }

        let previous = self.store.run_status().await?;
        self.store.set_run_status(RunStatus::Idle).await?;

        if previous.is_running() {
            info!("VQE run stopped");
        } else {
            debug!(%previous, "Stop requested with no active run");
        }
        Ok(StopAck::stopped())
    }
}

impl Drop for RunController {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.try_lock() {
            if let Some(pending) = slot.pending.take() {
                pending.handle.abort();
            }
        }
    }
}

async fn complete_after(
    store: Arc<dyn DataStore>,
    slot: Arc<Mutex<CompletionSlot>>,
    delay: Duration,
    generation: u64,
) {
    tokio::time::sleep(delay).await;

    let mut slot = slot.lock().await;
    if slot.pending.as_ref().map(|p| p.generation) != Some(generation) {
        debug!(generation, "Stale run completion ignored");
        return;
    }
    slot.pending = None;

    match store.run_status().await {
        Ok(RunStatus::Running) => {}
        Ok(status) => {
            debug!(generation, %status, "Run no longer running, completion skipped");
            return;
        }
        Err(e) => {
            error!(generation, error = %e, "Failed to read run status");
            return;
        }
    }

    match store.set_run_status(RunStatus::Completed).await {
        Ok(()) => info!(generation, "VQE run completed"),
        Err(e) => error!(generation, error = %e, "Failed to mark run completed"),
    }
}
