//! Reference dataset types served to the dashboard.
//!
//! All types serialize with camelCase field names, matching the JSON shape
//! the dashboard frontend consumes.

use serde::{Deserialize, Serialize};

use crate::run::{RunConfig, RunStatus};

// ============================================================================
// Molecular simulation
// ============================================================================

/// A single atom of the molecular geometry (coordinates in Ångström).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub id: u32,
    pub element: String,
    pub symbol: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Partial charge.
    pub charge: f64,
}

/// Bond order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BondKind {
    Single,
    Double,
    Triple,
}

/// A bond between two atoms, referenced by atom id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub id: u32,
    pub atom1: u32,
    pub atom2: u32,
    #[serde(rename = "type")]
    pub kind: BondKind,
    /// Bond length in Ångström.
    pub length: f64,
}

/// One term of the molecular Hamiltonian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HamiltonianTerm {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub coefficient: f64,
    pub operator: String,
}

/// Energy after a given optimizer iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EigenvaluePoint {
    pub iteration: u32,
    pub energy: f64,
}

/// Molecular geometry, Hamiltonian and ground-state results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularData {
    pub molecule: String,
    pub formula: String,
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub hamiltonian_terms: Vec<HamiltonianTerm>,
    pub basis_sets: Vec<String>,
    pub selected_basis_set: String,
    pub electron_count: u32,
    /// Ground state energy in Hartree.
    pub ground_state_energy: f64,
    pub eigenvalue_history: Vec<EigenvaluePoint>,
    pub iteration_count: u32,
}

impl MolecularData {
    /// Look up an atom by id.
    pub fn atom(&self, id: u32) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.id == id)
    }
}

// ============================================================================
// Quantum resources
// ============================================================================

/// Availability of a quantum backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendStatus {
    Online,
    Offline,
    Busy,
}

/// A quantum backend offered by a cloud provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantumBackend {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub status: BackendStatus,
}

/// Outcome of a historical run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStatus {
    Completed,
    Failed,
    Running,
}

/// A past execution on a quantum backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunHistoryEntry {
    pub id: u32,
    pub timestamp: String,
    /// Backend display name.
    pub backend: String,
    pub qubits: u32,
    pub depth: u32,
    pub shots: u32,
    /// Execution time in seconds.
    pub execution_time: f64,
    pub status: HistoryStatus,
}

/// Backends, resource estimates and run history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantumResourceData {
    pub backends: Vec<QuantumBackend>,
    pub selected_backend: String,
    pub logical_qubits: u32,
    pub circuit_depth: u32,
    pub shot_count: u32,
    pub error_estimate: f64,
    /// Seconds per run.
    pub execution_time_per_run: f64,
    pub run_history: Vec<RunHistoryEntry>,
}

impl QuantumResourceData {
    /// Backends currently accepting jobs.
    pub fn online_backends(&self) -> impl Iterator<Item = &QuantumBackend> {
        self.backends
            .iter()
            .filter(|b| b.status == BackendStatus::Online)
    }
}

// ============================================================================
// Fertilizer efficiency
// ============================================================================

/// Classical vs quantum figure for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicalQuantumComparison {
    pub metric: String,
    pub classical: f64,
    pub quantum: f64,
    pub unit: String,
    /// Improvement in percent.
    pub improvement: f64,
}

/// Energy and efficiency after a given iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationTrendPoint {
    pub iteration: u32,
    pub energy: f64,
    pub efficiency: f64,
}

/// Haber-Bosch efficiency metrics derived from the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerMetricsData {
    /// kJ/mol.
    pub energy_per_mole: f64,
    pub nitrogen_fixation_score: f64,
    pub reaction_efficiency_index: f64,
    pub emission_proxy_score: f64,
    pub comparison_table: Vec<ClassicalQuantumComparison>,
    pub iteration_trend: Vec<IterationTrendPoint>,
}

// ============================================================================
// VQE execution
// ============================================================================

/// A selectable ansatz or optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmOption {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// One line of the optimizer convergence log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceLogEntry {
    pub timestamp: String,
    pub iteration: u32,
    pub energy: f64,
    pub gradient: f64,
    pub message: String,
}

/// A gate in the ansatz circuit layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitGate {
    #[serde(rename = "type")]
    pub kind: String,
    pub qubit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<f64>,
}

fn default_min_layers() -> u32 {
    RunConfig::MIN_LAYERS
}

fn default_max_layers() -> u32 {
    RunConfig::MAX_LAYERS
}

fn default_min_step_size() -> f64 {
    RunConfig::MIN_STEP_SIZE
}

fn default_max_step_size() -> f64 {
    RunConfig::MAX_STEP_SIZE
}

/// Algorithm options, limits, live status and convergence log.
///
/// The limits default to the [`RunConfig`] bounds so the frontend sliders
/// always agree with server-side validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VqeExecutionData {
    pub algorithm: String,
    pub ansatz_options: Vec<AlgorithmOption>,
    pub selected_ansatz: String,
    pub optimizer_options: Vec<AlgorithmOption>,
    pub selected_optimizer: String,
    pub layers: u32,
    pub step_size: f64,
    #[serde(default = "default_min_layers")]
    pub min_layers: u32,
    #[serde(default = "default_max_layers")]
    pub max_layers: u32,
    #[serde(default = "default_min_step_size")]
    pub min_step_size: f64,
    #[serde(default = "default_max_step_size")]
    pub max_step_size: f64,
    /// Filled in from the store on every read.
    #[serde(default)]
    pub status: RunStatus,
    pub convergence_log: Vec<ConvergenceLogEntry>,
    #[serde(default)]
    pub circuit_structure: Vec<Vec<CircuitGate>>,
}

impl VqeExecutionData {
    /// The default configuration preselected in the frontend.
    pub fn default_config(&self) -> RunConfig {
        RunConfig::new(
            self.selected_ansatz.clone(),
            self.selected_optimizer.clone(),
            self.layers,
            self.step_size,
        )
    }
}

// ============================================================================
// R&D decision support
// ============================================================================

/// A labelled figure with an optional relative change (percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSummary {
    pub label: String,
    pub value: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
}

/// Cost estimate for one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostProxyEntry {
    pub resource: String,
    pub quantity: f64,
    pub unit_cost: f64,
    pub total_cost: f64,
}

/// Recommendation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
}

/// An R&D recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: u32,
    pub priority: RecommendationPriority,
    pub title: String,
    pub description: String,
    pub impact: String,
}

/// Summaries, costs, recommendations and the live research notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionSupportData {
    pub energy_reduction_summary: ResourceSummary,
    pub resource_usage_summary: Vec<ResourceSummary>,
    pub cost_proxy_table: Vec<CostProxyEntry>,
    pub recommendations: Vec<Recommendation>,
    /// Filled in from the store on every read.
    #[serde(default)]
    pub research_notes: String,
}

impl DecisionSupportData {
    /// Sum of all cost proxy entries.
    pub fn total_cost(&self) -> f64 {
        self.cost_proxy_table.iter().map(|e| e.total_cost).sum()
    }
}
