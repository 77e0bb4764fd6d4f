//! Data store: reference datasets plus the two mutable fields.

use async_trait::async_trait;
use tokio::sync::{RwLock, watch};

use crate::error::CoreResult;
use crate::fixtures::Fixtures;
use crate::model::{
    DecisionSupportData, FertilizerMetricsData, MolecularData, QuantumResourceData,
    VqeExecutionData,
};
use crate::run::{ResearchNotes, RunStatus};

/// Access to the dashboard datasets and mutable run state.
///
/// Every getter returns an owned copy; nothing a caller does with the
/// returned value can reach the shared state.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Molecular geometry and Hamiltonian.
    async fn molecular_data(&self) -> CoreResult<MolecularData>;

    /// Backends, resource figures and run history.
    async fn quantum_resources(&self) -> CoreResult<QuantumResourceData>;

    /// Fertilizer efficiency metrics.
    async fn fertilizer_metrics(&self) -> CoreResult<FertilizerMetricsData>;

    /// VQE options and convergence log with the live run status.
    async fn vqe_execution(&self) -> CoreResult<VqeExecutionData>;

    /// Decision support data with the live research notes.
    async fn decision_support(&self) -> CoreResult<DecisionSupportData>;

    /// Current research notes.
    async fn research_notes(&self) -> CoreResult<String>;

    /// Replace the research notes.
    async fn set_research_notes(&self, notes: ResearchNotes) -> CoreResult<()>;

    /// Current run status.
    async fn run_status(&self) -> CoreResult<RunStatus>;

    /// Replace the run status.
    async fn set_run_status(&self, status: RunStatus) -> CoreResult<()>;

    /// Watch run status changes.
    fn subscribe_status(&self) -> watch::Receiver<RunStatus>;

    /// Validate raw text and store it as the research notes.
    async fn update_research_notes(&self, text: String) -> CoreResult<()> {
        let notes = ResearchNotes::new(text)?;
        self.set_research_notes(notes).await
    }
}

/// Process-local store backed by the bundled fixtures.
pub struct InMemoryStore {
    fixtures: Fixtures,
    status: watch::Sender<RunStatus>,
    notes: RwLock<String>,
}

impl InMemoryStore {
    /// Create a store from the bundled datasets.
    pub fn new() -> CoreResult<Self> {
        Ok(Self::with_fixtures(Fixtures::bundled()?))
    }

    /// Create a store from the given datasets.
    pub fn with_fixtures(fixtures: Fixtures) -> Self {
        Self {
            fixtures,
            status: watch::Sender::new(RunStatus::INITIAL),
            notes: RwLock::new(String::new()),
        }
    }
}

#[async_trait]
impl DataStore for InMemoryStore {
    async fn molecular_data(&self) -> CoreResult<MolecularData> {
        Ok(self.fixtures.molecular.clone())
    }

    async fn quantum_resources(&self) -> CoreResult<QuantumResourceData> {
        Ok(self.fixtures.quantum_resources.clone())
    }

    async fn fertilizer_metrics(&self) -> CoreResult<FertilizerMetricsData> {
        Ok(self.fixtures.fertilizer_metrics.clone())
    }

    async fn vqe_execution(&self) -> CoreResult<VqeExecutionData> {
        let mut data = self.fixtures.vqe_execution.clone();
        data.status = *self.status.borrow();
        Ok(data)
    }

    async fn decision_support(&self) -> CoreResult<DecisionSupportData> {
        let mut data = self.fixtures.decision_support.clone();
        data.research_notes = self.notes.read().await.clone();
        Ok(data)
    }

    async fn research_notes(&self) -> CoreResult<String> {
        Ok(self.notes.read().await.clone())
    }

    async fn set_research_notes(&self, notes: ResearchNotes) -> CoreResult<()> {
        *self.notes.write().await = notes.into_inner();
        Ok(())
    }

    async fn run_status(&self) -> CoreResult<RunStatus> {
        Ok(*self.status.borrow())
    }

    async fn set_run_status(&self, status: RunStatus) -> CoreResult<()> {
        // Only wake watchers on an actual change.
        self.status.send_if_modified(|current| {
            if *current == status {
                false
            } else {
                *current = status;
                true
            }
        });
        Ok(())
    }

    fn subscribe_status(&self) -> watch::Receiver<RunStatus> {
        self.status.subscribe()
    }
}
