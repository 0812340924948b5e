//! State scoped to one page visit.
//!
//! A visit owns both lead forms and the popup trigger. The two flows share
//! nothing but the lookup provider; a new visit (full reload) starts over.

use crate::exit_intent::{ExitIntent, PageEvent};
use crate::flow::{FlowKind, LeadFlow};
use eros_core::AppConfig;
use eros_registry::CompanyLookup;
use std::sync::Arc;
use tracing::debug;

/// One page lifetime: contact-section flow, popup flow and popup trigger.
#[derive(Debug)]
pub struct PageVisit {
    contact: Option<LeadFlow>,
    popup: LeadFlow,
    exit_intent: ExitIntent,
}

impl PageVisit {
    /// Start a visit with the given lookup provider.
    #[must_use]
    pub fn new(config: &AppConfig, lookup: Arc<dyn CompanyLookup>) -> Self {
        let contact = config
            .lead
            .contact_section_enabled
            .then(|| LeadFlow::new(FlowKind::ContactSection, Arc::clone(&lookup)));
        let exit_intent = if config.popup.enabled {
            ExitIntent::new(config.popup.edge_tolerance_px)
        } else {
            ExitIntent::disabled()
        };
        debug!(
            contact_section = contact.is_some(),
            popup = config.popup.enabled,
            "page visit started"
        );

        Self {
            contact,
            popup: LeadFlow::new(FlowKind::ExitPopup, lookup),
            exit_intent,
        }
    }

    /// Feed a page event to the popup trigger; `true` if the popup just opened.
    pub fn observe(&mut self, event: PageEvent) -> bool {
        self.exit_intent.observe(event)
    }

    /// Close the popup for the rest of the visit.
    ///
    /// The popup flow keeps whatever state it had but can no longer be
    /// driven through [`popup_flow_mut`](Self::popup_flow_mut).
    pub fn close_popup(&mut self) {
        self.exit_intent.dismiss();
    }

    /// Whether the popup is on screen.
    #[must_use]
    pub fn popup_visible(&self) -> bool {
        self.exit_intent.is_visible()
    }

    /// The contact-section flow, when the section is enabled.
    pub fn contact_flow_mut(&mut self) -> Option<&mut LeadFlow> {
        self.contact.as_mut()
    }

    /// The popup flow, only while the popup is visible.
    pub fn popup_flow_mut(&mut self) -> Option<&mut LeadFlow> {
        if self.exit_intent.is_visible() {
            Some(&mut self.popup)
        } else {
            None
        }
    }

    /// Read-only access to the contact-section flow.
    #[must_use]
    pub fn contact_flow(&self) -> Option<&LeadFlow> {
        self.contact.as_ref()
    }

    /// Read-only access to the popup flow.
    #[must_use]
    pub fn popup_flow(&self) -> &LeadFlow {
        &self.popup
    }
}
