//! Eros Registry - CNPJ lookup against the public company registry.
//!
//! This crate turns a 14-digit CNPJ into a display-ready [`CompanyRecord`].
//! The registry answers with loosely shaped JSON (snake_case or camelCase
//! keys, owners as a list or a single field), so every response goes
//! through [`normalize`] before anything renders it.
//!
//! # Example
//!
//! ```rust,no_run
//! use eros_core::{Cnpj, RegistryConfig};
//! use eros_registry::{normalize, CompanyLookup, OpenCnpjClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenCnpjClient::new(&RegistryConfig::default())?;
//! let cnpj = Cnpj::parse("11.222.333/0001-81")?;
//!
//! let payload = client.lookup(&cnpj).await?;
//! let record = normalize(&payload);
//! println!("{}", record.razao_social);
//! # Ok(())
//! # }
//! ```
//!
//! # Normalization
//!
//! ```text
//! raw JSON ─► first non-blank candidate key per field ─► trim / stringify ─► "-" if empty
//!        └──► QSA[*].nome_socio joined with ", " (fallback: top-level nome_socio)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod lookup;
pub mod normalizer;
pub mod opencnpj;

// Re-export commonly used types
pub use error::{RegistryError, Result};
pub use lookup::{interpret_response, CompanyLookup};
pub use normalizer::{normalize, normalize_value, CompanyRecord, RawRegistryPayload, PLACEHOLDER};
pub use opencnpj::OpenCnpjClient;
