//! Eros Lead - the CNPJ lead-capture flows.
//!
//! Two independent instances of the same state machine run on the page:
//! the form embedded in the contact section and the exit-intent popup.
//!
//! ```text
//! IdentifierEntry ──submit_identifier──► DetailsConfirmation
//!        ▲                                  │     │     ▲
//!        └───────── change_identifier ──────┘     │     │ back (contact section only)
//!                                 confirm_details ▼     │
//!                                             ContactEntry ──submit_contact──► Completed
//! ```
//!
//! `reset` returns any stage to an empty `IdentifierEntry`.
//!
//! # Example
//!
//! ```rust,no_run
//! use eros_core::RegistryConfig;
//! use eros_lead::{FlowKind, LeadFlow};
//! use eros_registry::OpenCnpjClient;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let lookup = Arc::new(OpenCnpjClient::new(&RegistryConfig::default())?);
//! let mut flow = LeadFlow::new(FlowKind::ContactSection, lookup);
//!
//! flow.submit_identifier("11.222.333/0001-81").await?;
//! flow.confirm_details()?;
//! let lead = flow.submit_contact("(47) 99999-9999", "compras@loja.com.br")?;
//! println!("captured lead {}", lead.id);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod contact;
pub mod error;
pub mod exit_intent;
pub mod flow;
pub mod messages;
pub mod stage;
pub mod visit;

// Re-export commonly used types
pub use contact::{ContactDetails, Lead};
pub use error::{FlowError, Result};
pub use exit_intent::{ExitIntent, PageEvent};
pub use flow::{FlowKind, FlowSnapshot, LeadFlow};
pub use stage::{FlowStage, Step, StepState, STEPS};
pub use visit::PageVisit;
