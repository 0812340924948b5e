//! Contact details and captured leads.

use crate::error::{FlowError, Result};
use crate::flow::FlowKind;
use crate::messages;
use eros_core::{Cnpj, Timestamp};
use eros_registry::CompanyRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Phone and e-mail typed by the retailer, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Phone number as typed
    pub phone: String,
    /// E-mail address as typed
    pub email: String,
}

impl ContactDetails {
    /// Trim both fields and require them to be non-blank.
    ///
    /// Formats are not checked beyond that.
    pub fn new(phone: &str, email: &str) -> Result<Self> {
        let phone = phone.trim();
        let email = email.trim();
        if phone.is_empty() || email.is_empty() {
            return Err(FlowError::Validation(messages::CONTACT_REQUIRED.to_string()));
        }
        Ok(Self {
            phone: phone.to_string(),
            email: email.to_string(),
        })
    }
}

/// A completed lead: who the company is and how to reach them.
///
/// Leads are acknowledged locally and handed back to the caller; nothing
/// here sends them anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    /// Unique lead identifier
    pub id: Uuid,
    /// Which form captured it
    pub kind: FlowKind,
    /// Registry identifier looked up
    pub cnpj: Cnpj,
    /// Company data confirmed by the retailer
    pub company: CompanyRecord,
    /// Contact details
    pub contact: ContactDetails,
    /// When the contact was submitted
    pub captured_at: Timestamp,
    /// Acknowledgement to show, if the form shows one
    pub notice: Option<String>,
}

impl Lead {
    pub(crate) fn capture(
        kind: FlowKind,
        cnpj: Cnpj,
        company: CompanyRecord,
        contact: ContactDetails,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            cnpj,
            company,
            contact,
            captured_at: Timestamp::now(),
            notice: kind.success_notice().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_trimmed() {
        let contact = ContactDetails::new("  11999999999 ", " a@b.com\n").expect("valid contact");
        assert_eq!(contact.phone, "11999999999");
        assert_eq!(contact.email, "a@b.com");
    }

    #[test]
    fn test_contact_blank_rejected() {
        for (phone, email) in [("", "a@b.com"), ("11999999999", "   "), (" ", "\t")] {
            let err = ContactDetails::new(phone, email).expect_err("blank field");
            assert_eq!(err, FlowError::Validation(messages::CONTACT_REQUIRED.to_string()));
        }
    }
}
