//! Error reported to the terminal user.

use eros_lead::FlowError;
use serde::Serialize;

/// Serializable error for `--json` output.
#[derive(Debug, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct CommandError {
    /// Stable error code for scripts (e.g., "CNPJ_NOT_FOUND")
    pub code: &'static str,
    /// Message shown to the user
    pub message: String,
}

impl CommandError {
    /// Create a new command error.
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<FlowError> for CommandError {
    fn from(err: FlowError) -> Self {
        let code = match &err {
            FlowError::Validation(_) => "VALIDATION",
            FlowError::LookupNotFound(_) => "CNPJ_NOT_FOUND",
            FlowError::LookupUnavailable(_) => "LOOKUP_UNAVAILABLE",
            FlowError::InvalidTransition { .. } => "INVALID_TRANSITION",
        };
        Self::new(code, err.to_string())
    }
}
