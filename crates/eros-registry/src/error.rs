//! Error types for registry lookups.

use thiserror::Error;

/// Errors that can occur while looking up a CNPJ.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry answered with a non-success status
    #[error("registry returned status {status}{}", message_suffix(.message))]
    NotFound {
        /// HTTP status code
        status: u16,
        /// Message carried by the error body, when it had one
        message: Option<String>,
    },

    /// The request could not complete (DNS, connect, TLS, timeout, ...)
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success status whose body is not valid JSON
    #[error("invalid registry response: {0}")]
    InvalidResponse(String),

    /// The HTTP client could not be built
    #[error("client error: {0}")]
    Client(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
