//! Error types for parameter validation and loading

use std::fmt;
use thiserror::Error;

/// Errors produced by the analysis library
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// One or more parameters are missing or outside their documented domain
    #[error("invalid parameters: {}", join_errors(.0))]
    InvalidParameters(Vec<ParameterError>),

    /// Seasonal capacity table referenced a month that does not exist
    #[error("unknown month label: {0}")]
    UnknownMonth(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A single offending field with its camelCase path (e.g. "seasonalCapacity.feb")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterError {
    pub field: String,
    pub message: String,
}

impl ParameterError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_errors(errors: &[ParameterError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl AnalysisError {
    /// Field-level errors, empty for non-validation failures
    pub fn parameter_errors(&self) -> &[ParameterError] {
        match self {
            AnalysisError::InvalidParameters(errors) => errors,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_message_lists_every_field() {
        let err = AnalysisError::InvalidParameters(vec![
            ParameterError::new("rawMaterialCostPercent", "must be in (0, 1)"),
            ParameterError::new("seasonalCapacity.feb", "must be in [0.1, 1.0]"),
        ]);

        let msg = err.to_string();
        assert_eq!(
            msg,
            "invalid parameters: rawMaterialCostPercent: must be in (0, 1); seasonalCapacity.feb: must be in [0.1, 1.0]"
        );
        assert_eq!(err.parameter_errors().len(), 2);
    }

    #[test]
    fn test_non_validation_error_has_no_field_errors() {
        let err = AnalysisError::UnknownMonth("smarch".into());
        assert!(err.parameter_errors().is_empty());
    }
}
