//! The lookup flow state machine shared by both lead forms.

use crate::contact::{ContactDetails, Lead};
use crate::error::{FlowError, Result};
use crate::messages;
use crate::stage::FlowStage;
use eros_core::Cnpj;
use eros_registry::{normalize, CompanyLookup, CompanyRecord, RawRegistryPayload};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Which form a flow instance backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// Form embedded in the contact section
    ContactSection,
    /// Form inside the exit-intent popup
    ExitPopup,
}

impl FlowKind {
    /// Whether contact entry offers a way back to the company details.
    #[must_use]
    pub fn allows_back(self) -> bool {
        matches!(self, Self::ContactSection)
    }

    /// Whether the completed view offers to start a new lookup.
    #[must_use]
    pub fn offers_restart(self) -> bool {
        matches!(self, Self::ContactSection)
    }

    /// Acknowledgement shown once the contact is captured.
    #[must_use]
    pub fn success_notice(self) -> Option<&'static str> {
        match self {
            Self::ContactSection => Some(messages::LEAD_RECEIVED),
            Self::ExitPopup => None,
        }
    }

    /// Body text of the completed view.
    #[must_use]
    pub fn completed_message(self) -> &'static str {
        match self {
            Self::ContactSection => messages::COMPLETED_SECTION,
            Self::ExitPopup => messages::COMPLETED_POPUP,
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContactSection => f.write_str("contact section"),
            Self::ExitPopup => f.write_str("exit popup"),
        }
    }
}

/// Everything a view needs to render a flow, published after each change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowSnapshot {
    /// Which form this is
    pub kind: FlowKind,
    /// Current stage
    pub stage: FlowStage,
    /// CNPJ input text
    pub identifier: String,
    /// A lookup is in flight; the submit control should be disabled
    pub loading: bool,
    /// Inline error message, if the last operation failed
    pub error_message: Option<String>,
    /// Identifier that produced `company`
    pub cnpj: Option<Cnpj>,
    /// Company data; present from details confirmation on
    pub company: Option<CompanyRecord>,
    /// Phone input text
    pub phone: String,
    /// E-mail input text
    pub email: String,
}

#[derive(Debug, Clone)]
struct Confirmed {
    cnpj: Cnpj,
    company: CompanyRecord,
}

// The record lives inside the stage so it cannot exist before a lookup
// succeeded nor outlive `change_identifier`/`reset`.
#[derive(Debug, Clone)]
enum StageData {
    IdentifierEntry,
    DetailsConfirmation(Confirmed),
    ContactEntry(Confirmed),
    Completed(Box<Lead>),
}

impl StageData {
    fn stage(&self) -> FlowStage {
        match self {
            Self::IdentifierEntry => FlowStage::IdentifierEntry,
            Self::DetailsConfirmation(_) => FlowStage::DetailsConfirmation,
            Self::ContactEntry(_) => FlowStage::ContactEntry,
            Self::Completed(_) => FlowStage::Completed,
        }
    }

    fn confirmed(&self) -> Option<(&Cnpj, &CompanyRecord)> {
        match self {
            Self::IdentifierEntry => None,
            Self::DetailsConfirmation(c) | Self::ContactEntry(c) => Some((&c.cnpj, &c.company)),
            Self::Completed(lead) => Some((&lead.cnpj, &lead.company)),
        }
    }
}

/// Finite-state controller for one lead form.
///
/// All operations run on the caller's task. `submit_identifier` is the only
/// one that suspends, and it borrows the flow mutably for the whole lookup,
/// so a flow never has more than one lookup in flight. Dropping that future
/// abandons the lookup without touching the stage.
pub struct LeadFlow {
    kind: FlowKind,
    lookup: Arc<dyn CompanyLookup>,
    stage: StageData,
    identifier: String,
    phone: String,
    email: String,
    loading: bool,
    error_message: Option<String>,
    updates: watch::Sender<FlowSnapshot>,
}

impl LeadFlow {
    /// Create a flow in `IdentifierEntry` with empty inputs.
    #[must_use]
    pub fn new(kind: FlowKind, lookup: Arc<dyn CompanyLookup>) -> Self {
        let flow = Self {
            kind,
            lookup,
            stage: StageData::IdentifierEntry,
            identifier: String::new(),
            phone: String::new(),
            email: String::new(),
            loading: false,
            error_message: None,
            updates: watch::Sender::new(FlowSnapshot {
                kind,
                stage: FlowStage::IdentifierEntry,
                identifier: String::new(),
                loading: false,
                error_message: None,
                cnpj: None,
                company: None,
                phone: String::new(),
                email: String::new(),
            }),
        };
        debug!(kind = %flow.kind, provider = flow.lookup.provider_id(), "lead flow created");
        flow
    }

    /// Which form this flow backs.
    #[must_use]
    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    /// Current stage.
    #[must_use]
    pub fn stage(&self) -> FlowStage {
        self.stage.stage()
    }

    /// Company data, present from details confirmation on.
    #[must_use]
    pub fn company(&self) -> Option<&CompanyRecord> {
        self.stage.confirmed().map(|(_, company)| company)
    }

    /// Identifier that produced the company data.
    #[must_use]
    pub fn cnpj(&self) -> Option<&Cnpj> {
        self.stage.confirmed().map(|(cnpj, _)| cnpj)
    }

    /// The captured lead once completed.
    #[must_use]
    pub fn lead(&self) -> Option<&Lead> {
        match &self.stage {
            StageData::Completed(lead) => Some(lead.as_ref()),
            _ => None,
        }
    }

    /// Inline error message left by the last failed operation.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether a lookup is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// CNPJ input text.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Current state as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            kind: self.kind,
            stage: self.stage(),
            identifier: self.identifier.clone(),
            loading: self.loading,
            error_message: self.error_message.clone(),
            cnpj: self.cnpj().cloned(),
            company: self.company().cloned(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }

    /// Subscribe to snapshots published after every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FlowSnapshot> {
        self.updates.subscribe()
    }

    /// Bind the CNPJ input.
    pub fn set_identifier(&mut self, raw: impl Into<String>) {
        self.identifier = raw.into();
        self.publish();
    }

    /// Bind the phone input.
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
        self.publish();
    }

    /// Bind the e-mail input.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.publish();
    }

    /// Validate `raw`, look it up, normalize the answer and move to
    /// details confirmation.
    ///
    /// On any failure the flow stays in identifier entry with the error
    /// message recorded.
    pub async fn submit_identifier(&mut self, raw: &str) -> Result<CompanyRecord> {
        if !matches!(self.stage, StageData::IdentifierEntry) {
            return Err(self.invalid("submit identifier"));
        }

        self.identifier = raw.to_string();
        let Ok(cnpj) = Cnpj::parse(raw) else {
            return Err(self.fail(FlowError::Validation(
                messages::CNPJ_DIGITS_REQUIRED.to_string(),
            )));
        };

        self.error_message = None;
        self.loading = true;
        self.publish();

        let lookup = Arc::clone(&self.lookup);
        let guard = LoadingGuard { flow: self };
        let outcome = lookup.lookup(&cnpj).await;
        let result = guard.flow.apply_lookup(cnpj, outcome);
        drop(guard);
        result
    }

    fn apply_lookup(
        &mut self,
        cnpj: Cnpj,
        outcome: eros_registry::Result<RawRegistryPayload>,
    ) -> Result<CompanyRecord> {
        match outcome {
            Ok(payload) => {
                let company = normalize(&payload);
                debug!(kind = %self.kind, %cnpj, "lookup succeeded, confirming details");
                self.stage = StageData::DetailsConfirmation(Confirmed {
                    cnpj,
                    company: company.clone(),
                });
                self.error_message = None;
                Ok(company)
            }
            Err(e) => {
                warn!(kind = %self.kind, %cnpj, error = %e, "lookup failed");
                Err(self.fail(FlowError::from(&e)))
            }
        }
    }

    /// Accept the company data and move on to contact entry.
    pub fn confirm_details(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.stage, StageData::IdentifierEntry) {
            StageData::DetailsConfirmation(confirmed) => {
                self.stage = StageData::ContactEntry(confirmed);
                self.transitioned();
                Ok(())
            }
            other => {
                self.stage = other;
                Err(self.invalid("confirm details"))
            }
        }
    }

    /// Discard the company data and the typed CNPJ, back to identifier entry.
    pub fn change_identifier(&mut self) -> Result<()> {
        if !matches!(self.stage, StageData::DetailsConfirmation(_)) {
            return Err(self.invalid("change identifier"));
        }
        self.stage = StageData::IdentifierEntry;
        self.identifier.clear();
        self.transitioned();
        Ok(())
    }

    /// Return from contact entry to details confirmation, keeping the
    /// company data. Contact section only.
    pub fn back(&mut self) -> Result<()> {
        if !self.kind.allows_back() {
            return Err(self.invalid("go back"));
        }
        match std::mem::replace(&mut self.stage, StageData::IdentifierEntry) {
            StageData::ContactEntry(confirmed) => {
                self.stage = StageData::DetailsConfirmation(confirmed);
                self.transitioned();
                Ok(())
            }
            other => {
                self.stage = other;
                Err(self.invalid("go back"))
            }
        }
    }

    /// Record phone and e-mail and complete the flow.
    ///
    /// Both must be non-blank after trimming. The lead is returned to the
    /// caller and not sent anywhere.
    pub fn submit_contact(&mut self, phone: &str, email: &str) -> Result<Lead> {
        if !matches!(self.stage, StageData::ContactEntry(_)) {
            return Err(self.invalid("submit contact"));
        }

        self.phone = phone.to_string();
        self.email = email.to_string();
        let contact = match ContactDetails::new(phone, email) {
            Ok(contact) => contact,
            Err(e) => return Err(self.fail(e)),
        };

        let confirmed = match std::mem::replace(&mut self.stage, StageData::IdentifierEntry) {
            StageData::ContactEntry(confirmed) => confirmed,
            other => {
                self.stage = other;
                return Err(self.invalid("submit contact"));
            }
        };

        let lead = Lead::capture(self.kind, confirmed.cnpj, confirmed.company, contact);
        info!(lead_id = %lead.id, kind = %self.kind, cnpj = %lead.cnpj, "lead captured");
        self.stage = StageData::Completed(Box::new(lead.clone()));
        self.transitioned();
        Ok(lead)
    }

    /// Clear every input and return to identifier entry. Allowed from any stage.
    pub fn reset(&mut self) {
        self.stage = StageData::IdentifierEntry;
        self.identifier.clear();
        self.phone.clear();
        self.email.clear();
        self.error_message = None;
        debug!(kind = %self.kind, "flow reset");
        self.publish();
    }

    fn transitioned(&mut self) {
        self.error_message = None;
        debug!(kind = %self.kind, stage = %self.stage(), "flow transitioned");
        self.publish();
    }

    fn fail(&mut self, err: FlowError) -> FlowError {
        self.error_message = Some(err.to_string());
        self.publish();
        err
    }

    fn invalid(&self, action: &'static str) -> FlowError {
        let stage = self.stage();
        warn!(kind = %self.kind, %stage, action, "operation not available in this stage");
        FlowError::InvalidTransition { stage, action }
    }

    fn publish(&self) {
        self.updates.send_replace(self.snapshot());
    }
}

impl fmt::Debug for LeadFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeadFlow")
            .field("kind", &self.kind)
            .field("stage", &self.stage())
            .field("loading", &self.loading)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

/// Clears the loading flag when the lookup finishes or is abandoned.
struct LoadingGuard<'a> {
    flow: &'a mut LeadFlow,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flow.loading = false;
        self.flow.publish();
    }
}
