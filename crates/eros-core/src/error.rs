//! Core error types for the Eros storefront.
//!
//! This module defines the central error type shared across crates.
//! Subsystem crates keep their own typed errors and convert at the edges.

use thiserror::Error;

/// Central error type for Eros operations.
#[derive(Error, Debug)]
pub enum ErosError {
    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors (malformed identifiers, invalid input)
    #[error("validation error: {0}")]
    Validation(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `ErosError`.
pub type Result<T> = std::result::Result<T, ErosError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ErosError::Validation("expected 14 digits".to_string());
        assert_eq!(err.to_string(), "validation error: expected 14 digits");

        let err = ConfigError::InvalidValue {
            field: "registry.base_url".to_string(),
            reason: "must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for registry.base_url: must not be empty"
        );
    }

    #[test]
    fn test_error_from_config() {
        let eros_err: ErosError = ConfigError::NoConfigDir.into();
        assert!(matches!(eros_err, ErosError::Config(_)));
    }

    #[test]
    fn test_config_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ConfigError = io_err.into();
        assert_eq!(err.to_string(), "I/O error: denied");
    }
}
