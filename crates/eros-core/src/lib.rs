//! Eros Core - Foundation crate for the Eros Distribuidora storefront.
//!
//! This crate provides the shared error type, configuration management and
//! validated newtypes that the registry, lead and site crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Validated newtypes (`Cnpj`, `SectionId`, `Timestamp`)
//!
//! # Example
//!
//! ```rust
//! use eros_core::{AppConfig, Cnpj};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! assert!(config.popup.enabled);
//!
//! let cnpj = Cnpj::parse("11.222.333/0001-81")?;
//! assert_eq!(cnpj.as_str(), "11222333000181");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, GeneralConfig, LeadConfig, PopupConfig, RegistryConfig};
pub use error::{ConfigError, ConfigResult, ErosError, Result};
pub use types::{Cnpj, SectionId, Timestamp, CNPJ_DIGITS};
