//! Error types for the lookup flows.
//!
//! The first three variants are the user-recoverable kinds; their display
//! text is the inline message shown next to the form. None of them moves
//! the flow to another stage.

use crate::messages;
use crate::stage::FlowStage;
use eros_registry::RegistryError;
use thiserror::Error;

/// Errors returned by [`LeadFlow`](crate::LeadFlow) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Malformed identifier or incomplete contact fields
    #[error("{0}")]
    Validation(String),

    /// The registry answered that it does not know the identifier
    #[error("{0}")]
    LookupNotFound(String),

    /// The lookup request could not complete
    #[error("{0}")]
    LookupUnavailable(String),

    /// Operation not available from the current stage
    #[error("cannot {action} while in {stage}")]
    InvalidTransition {
        /// Stage the flow was in
        stage: FlowStage,
        /// Operation that was attempted
        action: &'static str,
    },
}

impl FlowError {
    /// Whether this error is shown to the person filling in the form.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::InvalidTransition { .. })
    }
}

impl From<&RegistryError> for FlowError {
    /// A registry answer keeps its message, falling back to the generic
    /// not-found text when blank; anything else is reported as unavailable.
    fn from(err: &RegistryError) -> Self {
        match err {
            RegistryError::NotFound { message, .. } => Self::LookupNotFound(
                message
                    .as_deref()
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .unwrap_or(messages::CNPJ_NOT_FOUND)
                    .to_string(),
            ),
            RegistryError::Transport(_)
            | RegistryError::InvalidResponse(_)
            | RegistryError::Client(_) => {
                Self::LookupUnavailable(messages::LOOKUP_UNAVAILABLE.to_string())
            }
        }
    }
}

/// Result type alias for flow operations.
pub type Result<T> = std::result::Result<T, FlowError>;
