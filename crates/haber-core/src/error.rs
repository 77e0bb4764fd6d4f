//! Error handling for the dashboard core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in the data store or the run controller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A run configuration or notes update violated a constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A run was started while another one is still running.
    #[error("A VQE run is already in progress")]
    RunInProgress,

    /// An embedded reference dataset could not be decoded.
    #[error("Fixture error in {name}: {message}")]
    Fixture { name: &'static str, message: String },

    /// Internal store error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    /// Check if this error was caused by caller input.
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::validation("layers must be between 1 and 10, got 0");
        assert_eq!(
            err.to_string(),
            "Validation error: layers must be between 1 and 10, got 0"
        );
        assert!(err.is_validation());

        let err = CoreError::RunInProgress;
        assert_eq!(err.to_string(), "A VQE run is already in progress");
        assert!(!err.is_validation());

        let err = CoreError::Fixture {
            name: "molecular",
            message: "missing field `atoms`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Fixture error in molecular: missing field `atoms`"
        );
    }
}
