//! Bundled NH₃ reference datasets.
//!
//! The datasets are embedded at compile time from `data/*.json` and decoded
//! once when a store is created.

use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::model::{
    DecisionSupportData, FertilizerMetricsData, MolecularData, QuantumResourceData,
    VqeExecutionData,
};

const MOLECULAR_JSON: &str = include_str!("../data/molecular.json");
const QUANTUM_RESOURCES_JSON: &str = include_str!("../data/quantum_resources.json");
const FERTILIZER_METRICS_JSON: &str = include_str!("../data/fertilizer_metrics.json");
const VQE_EXECUTION_JSON: &str = include_str!("../data/vqe_execution.json");
const DECISION_SUPPORT_JSON: &str = include_str!("../data/decision_support.json");

/// The complete set of immutable reference datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixtures {
    pub molecular: MolecularData,
    pub quantum_resources: QuantumResourceData,
    pub fertilizer_metrics: FertilizerMetricsData,
    /// Status is a placeholder here; the store overlays the live value.
    pub vqe_execution: VqeExecutionData,
    /// Notes are a placeholder here; the store overlays the live value.
    pub decision_support: DecisionSupportData,
}

impl Fixtures {
    /// Decode the datasets bundled with the crate.
    pub fn bundled() -> CoreResult<Self> {
        Ok(Self {
            molecular: decode("molecular", MOLECULAR_JSON)?,
            quantum_resources: decode("quantum_resources", QUANTUM_RESOURCES_JSON)?,
            fertilizer_metrics: decode("fertilizer_metrics", FERTILIZER_METRICS_JSON)?,
            vqe_execution: decode("vqe_execution", VQE_EXECUTION_JSON)?,
            decision_support: decode("decision_support", DECISION_SUPPORT_JSON)?,
        })
    }
}

fn decode<T: DeserializeOwned>(name: &'static str, json: &str) -> CoreResult<T> {
    serde_json::from_str(json).map_err(|e| CoreError::Fixture {
        name,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BackendStatus, HistoryStatus, RecommendationPriority};
    use crate::run::{RunConfig, RunStatus};

    fn fixtures() -> Fixtures {
        Fixtures::bundled().expect("bundled fixtures decode")
    }

    #[test]
    fn test_molecular_geometry() {
        let mol = fixtures().molecular;
        assert_eq!(mol.molecule, "NH3");
        assert_eq!(mol.atoms.len(), 4);
        assert_eq!(mol.atoms.iter().filter(|a| a.symbol == "H").count(), 3);
        assert_eq!(mol.electron_count, 10);
        assert_eq!(mol.ground_state_energy, -56.21954);
        assert_eq!(mol.eigenvalue_history.len() as u32, mol.iteration_count);
        assert!(mol.basis_sets.contains(&mol.selected_basis_set));
    }

    #[test]
    fn test_bonds_reference_existing_atoms() {
        let mol = fixtures().molecular;
        for bond in &mol.bonds {
            assert!(mol.atom(bond.atom1).is_some(), "bond {} atom1", bond.id);
            assert!(mol.atom(bond.atom2).is_some(), "bond {} atom2", bond.id);
        }
        assert!(mol.atom(99).is_none());
    }

    #[test]
    fn test_eigenvalue_history_ends_at_ground_state() {
        let mol = fixtures().molecular;
        let last = mol.eigenvalue_history.last().unwrap();
        assert_eq!(last.energy, mol.ground_state_energy);
    }

    #[test]
    fn test_quantum_resources() {
        let res = fixtures().quantum_resources;
        assert_eq!(res.backends.len(), 4);
        assert_eq!(res.online_backends().count(), 2);
        assert!(res.backends.iter().any(|b| b.id == res.selected_backend));
        assert_eq!(res.backends[2].status, BackendStatus::Busy);
        assert_eq!(res.run_history.len(), 6);
        assert_eq!(res.run_history[4].status, HistoryStatus::Failed);
    }

    #[test]
    fn test_fertilizer_metrics() {
        let metrics = fixtures().fertilizer_metrics;
        assert_eq!(metrics.comparison_table.len(), 6);
        assert_eq!(metrics.iteration_trend.len(), 10);
        assert_eq!(metrics.reaction_efficiency_index, 0.924);
    }

    #[test]
    fn test_vqe_limits_follow_run_config_bounds() {
        let vqe = fixtures().vqe_execution;
        assert_eq!(vqe.min_layers, RunConfig::MIN_LAYERS);
        assert_eq!(vqe.max_layers, RunConfig::MAX_LAYERS);
        assert_eq!(vqe.min_step_size, RunConfig::MIN_STEP_SIZE);
        assert_eq!(vqe.max_step_size, RunConfig::MAX_STEP_SIZE);
        assert_eq!(vqe.status, RunStatus::Idle);
        assert!(vqe.circuit_structure.is_empty());
        assert_eq!(vqe.convergence_log.len(), 10);
    }

    #[test]
    fn test_vqe_default_config_is_valid() {
        let vqe = fixtures().vqe_execution;
        let config = vqe.default_config();
        assert_eq!(config.ansatz_id, "uccsd");
        assert_eq!(config.optimizer_id, "cobyla");
        assert!(config.validate().is_ok());
        assert!(vqe.ansatz_options.iter().any(|o| o.id == config.ansatz_id));
        assert!(vqe.optimizer_options.iter().any(|o| o.id == config.optimizer_id));
    }

    #[test]
    fn test_decision_support() {
        let ds = fixtures().decision_support;
        assert_eq!(ds.recommendations.len(), 5);
        assert_eq!(ds.recommendations[0].priority, RecommendationPriority::High);
        assert!(ds.research_notes.is_empty());
        assert!((ds.total_cost() - 16.23).abs() < 1e-9);
    }

    #[test]
    fn test_decode_reports_dataset_name() {
        let err = decode::<MolecularData>("molecular", "{}").unwrap_err();
        match err {
            CoreError::Fixture { name, .. } => assert_eq!(name, "molecular"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
