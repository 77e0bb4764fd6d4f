//! Run lifecycle types: status, configuration, acknowledgements and notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// Lifecycle state of the simulated VQE execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// No run active.
    #[default]
    Idle,
    /// A run has been started and its completion timer is pending.
    Running,
    /// The last run finished.
    Completed,
    /// The last run failed.
    Error,
}

impl RunStatus {
    /// Status of a freshly created store. The bundled datasets describe a
    /// finished run, so the dashboard starts out as completed.
    pub const INITIAL: RunStatus = RunStatus::Completed;

    /// Check if a run is in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::Running)
    }

    /// Check if the status is terminal for the last run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Error)
    }

    /// Wire name of the status.
    pub fn name(&self) -> &'static str {
        match self {
            RunStatus::Idle => "idle",
            RunStatus::Running => "running",
            RunStatus::Completed => "completed",
            RunStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Algorithm configuration submitted with a run request.
///
/// The ansatz and optimizer are accepted as opaque identifiers; only the
/// numeric parameters are range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Ansatz identifier (e.g. "uccsd").
    #[serde(rename = "ansatz")]
    pub ansatz_id: String,
    /// Classical optimizer identifier (e.g. "cobyla").
    #[serde(rename = "optimizer")]
    pub optimizer_id: String,
    /// Number of ansatz layers.
    #[serde(rename = "layers")]
    pub layer_count: u32,
    /// Optimizer step size.
    #[serde(rename = "stepSize")]
    pub step_size: f64,
}

impl RunConfig {
    /// Minimum number of ansatz layers.
    pub const MIN_LAYERS: u32 = 1;
    /// Maximum number of ansatz layers.
    pub const MAX_LAYERS: u32 = 10;
    /// Minimum optimizer step size.
    pub const MIN_STEP_SIZE: f64 = 0.001;
    /// Maximum optimizer step size.
    pub const MAX_STEP_SIZE: f64 = 0.1;

    /// Create a new configuration. Call [`RunConfig::validate`] before use.
    pub fn new(
        ansatz_id: impl Into<String>,
        optimizer_id: impl Into<String>,
        layer_count: u32,
        step_size: f64,
    ) -> Self {
        Self {
            ansatz_id: ansatz_id.into(),
            optimizer_id: optimizer_id.into(),
            layer_count,
            step_size,
        }
    }

    /// Check the numeric parameters against their allowed ranges.
    pub fn validate(&self) -> CoreResult<()> {
        if !(Self::MIN_LAYERS..=Self::MAX_LAYERS).contains(&self.layer_count) {
            return Err(CoreError::validation(format!(
                "layers must be between {} and {}, got {}",
                Self::MIN_LAYERS,
                Self::MAX_LAYERS,
                self.layer_count
            )));
        }
        // NaN fails the range check as well.
        if !(Self::MIN_STEP_SIZE..=Self::MAX_STEP_SIZE).contains(&self.step_size) {
            return Err(CoreError::validation(format!(
                "stepSize must be between {} and {}, got {}",
                Self::MIN_STEP_SIZE,
                Self::MAX_STEP_SIZE,
                self.step_size
            )));
        }
        Ok(())
    }
}

/// Acknowledgement returned when a run is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunAck {
    /// Human-readable message.
    pub message: String,
    /// Identifier of the accepted run.
    pub run_id: Uuid,
    /// The configuration exactly as accepted.
    pub config: RunConfig,
    /// When the run was started.
    pub started_at: DateTime<Utc>,
}

impl RunAck {
    pub(crate) fn started(config: RunConfig) -> Self {
        Self {
            message: "VQE execution started".to_string(),
            run_id: Uuid::new_v4(),
            config,
            started_at: Utc::now(),
        }
    }
}

/// Acknowledgement returned by a stop request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopAck {
    /// Human-readable message.
    pub message: String,
}

impl StopAck {
    pub(crate) fn stopped() -> Self {
        Self {
            message: "VQE execution stopped".to_string(),
        }
    }
}

/// Free-text research notes, bounded in length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResearchNotes(String);

impl ResearchNotes {
    /// Maximum length in characters.
    pub const MAX_CHARS: usize = 5000;

    /// Validate and wrap a notes text.
    pub fn new(text: impl Into<String>) -> CoreResult<Self> {
        let text = text.into();
        let len = text.chars().count();
        if len > Self::MAX_CHARS {
            return Err(CoreError::validation(format!(
                "notes must be at most {} characters, got {len}",
                Self::MAX_CHARS
            )));
        }
        Ok(Self(text))
    }

    /// Borrow the notes text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config(layers: u32, step: f64) -> RunConfig {
        RunConfig::new("uccsd", "cobyla", layers, step)
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&RunStatus::Idle).unwrap(), "\"idle\"");
        assert_eq!(
            serde_json::to_string(&RunStatus::Completed).unwrap(),
            "\"completed\""
        );
        let parsed: RunStatus = serde_json::from_str("\"running\"").unwrap();
        assert_eq!(parsed, RunStatus::Running);
        assert_eq!(RunStatus::Error.to_string(), "error");
    }

    #[test]
    fn test_status_predicates() {
        assert!(RunStatus::Running.is_running());
        assert!(!RunStatus::Idle.is_running());
        assert!(RunStatus::Completed.is_terminal());
        assert!(RunStatus::Error.is_terminal());
        assert!(!RunStatus::Idle.is_terminal());
        assert_eq!(RunStatus::INITIAL, RunStatus::Completed);
    }

    #[test]
    fn test_config_bounds_are_inclusive() {
        assert!(config(1, 0.001).validate().is_ok());
        assert!(config(10, 0.1).validate().is_ok());
        assert!(config(4, 0.01).validate().is_ok());
    }

    #[test]
    fn test_config_rejects_out_of_range_layers() {
        let err = config(0, 0.01).validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("layers"));

        assert!(config(11, 0.01).validate().is_err());
    }

    #[test]
    fn test_config_rejects_out_of_range_step_size() {
        let err = config(4, 0.2).validate().unwrap_err();
        assert!(err.to_string().contains("stepSize"));

        assert!(config(4, 0.0).validate().is_err());
        assert!(config(4, f64::NAN).validate().is_err());
        assert!(config(4, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_config_wire_format() {
        let config: RunConfig = serde_json::from_str(
            r#"{"ansatz":"hardware-efficient","optimizer":"spsa","layers":3,"stepSize":0.05}"#,
        )
        .unwrap();
        assert_eq!(config.ansatz_id, "hardware-efficient");
        assert_eq!(config.optimizer_id, "spsa");
        assert_eq!(config.layer_count, 3);
        assert_eq!(config.step_size, 0.05);

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["ansatz"], "hardware-efficient");
        assert_eq!(value["stepSize"], 0.05);
    }

    #[test]
    fn test_notes_length_limit() {
        assert!(ResearchNotes::new("a".repeat(5000)).is_ok());

        let err = ResearchNotes::new("a".repeat(5001)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_notes_count_characters_not_bytes() {
        // 5000 multi-byte characters are still within the limit.
        let notes = ResearchNotes::new("₃".repeat(5000)).unwrap();
        assert_eq!(notes.as_str().chars().count(), 5000);
    }

    proptest! {
        #[test]
        fn prop_valid_configs_pass(layers in 1u32..=10, step in 0.001f64..=0.1) {
            prop_assert!(config(layers, step).validate().is_ok());
        }

        #[test]
        fn prop_layers_above_max_fail(layers in 11u32..1000, step in 0.001f64..=0.1) {
            prop_assert!(config(layers, step).validate().is_err());
        }
    }
}
