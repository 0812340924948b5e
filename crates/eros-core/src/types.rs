//! Shared types used across the Eros storefront.
//!
//! This module defines validated newtypes that keep malformed identifiers
//! from travelling past the edge where they were typed in.

use crate::error::ErosError;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Number of digits in a CNPJ (Brazilian company registry identifier).
pub const CNPJ_DIGITS: usize = 14;

/// A CNPJ reduced to its 14 digits.
///
/// Formatting characters (dots, slash, hyphen, spaces) are stripped on
/// parse. Check digits are not verified: any 14-digit string is accepted
/// and the registry decides whether the company exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Parse a CNPJ from user input, ignoring every non-digit character.
    ///
    /// # Errors
    /// Returns `ErosError::Validation` unless exactly 14 digits remain.
    pub fn parse(raw: &str) -> Result<Self, ErosError> {
        let digits = Self::strip(raw);
        if digits.len() == CNPJ_DIGITS {
            Ok(Self(digits))
        } else {
            Err(ErosError::Validation(format!(
                "CNPJ must have {CNPJ_DIGITS} digits, got {}",
                digits.len()
            )))
        }
    }

    /// Remove every non-digit character from `raw`.
    #[must_use]
    pub fn strip(raw: &str) -> String {
        static NON_DIGIT: OnceLock<Regex> = OnceLock::new();
        let regex = NON_DIGIT.get_or_init(|| Regex::new(r"[^0-9]").expect("valid regex"));
        regex.replace_all(raw, "").into_owned()
    }

    /// Get the bare digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render with the conventional mask, e.g. `11.222.333/0001-81`.
    #[must_use]
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!(
            "{}.{}.{}/{}-{}",
            &d[0..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..14]
        )
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = ErosError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

/// Stable anchor identifier for a page section (`contato`, `marcas`, ...).
///
/// Lowercase ASCII letters, digits and hyphens, 1-40 characters. A single
/// leading `#` is accepted and dropped so hrefs can be passed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(String);

impl SectionId {
    /// Create a new `SectionId`.
    ///
    /// # Errors
    /// Returns error if the identifier doesn't match the anchor format.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ErosError> {
        let id = id.as_ref();
        let id = id.strip_prefix('#').unwrap_or(id);
        Self::validate(id)?;
        Ok(Self(id.to_string()))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render as an in-page href (`#contato`).
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }

    fn validate(id: &str) -> Result<(), ErosError> {
        static ANCHOR_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex =
            ANCHOR_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9-]{1,40}$").expect("valid regex"));

        if regex.is_match(id) {
            Ok(())
        } else {
            Err(ErosError::Validation(format!(
                "invalid section ID: must be 1-40 lowercase alphanumerics or hyphens, got '{id}'"
            )))
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wrapper around `chrono::DateTime<Utc>` for consistent timestamp handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Format as RFC3339 string.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}
