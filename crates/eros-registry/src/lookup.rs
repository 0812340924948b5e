//! Lookup provider trait and shared response interpretation.

use crate::error::{RegistryError, Result};
use crate::normalizer::RawRegistryPayload;
use async_trait::async_trait;
use eros_core::Cnpj;
use serde_json::Value;

/// A source of company registry payloads.
///
/// Implementations issue exactly one request per call and never retry;
/// retrying is left to whoever operates the form.
#[async_trait]
pub trait CompanyLookup: Send + Sync {
    /// Fetch the raw registry payload for `cnpj`.
    ///
    /// # Errors
    /// `RegistryError::NotFound` when the registry answers with a
    /// non-success status, `Transport`/`InvalidResponse` when no usable
    /// answer arrived.
    async fn lookup(&self, cnpj: &Cnpj) -> Result<RawRegistryPayload>;

    /// Get the unique identifier for this provider.
    fn provider_id(&self) -> &str;
}

/// Interpret a registry response from its status code and body bytes.
///
/// - success + JSON object: the payload
/// - success + other JSON: an empty payload
/// - success + unparseable body: `InvalidResponse`
/// - any other status: `NotFound`, carrying the body's `message` string
///   when the body is JSON and has one. A malformed error body is never an
///   error of its own.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<RawRegistryPayload> {
    if (200..300).contains(&status) {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;
        return Ok(match value {
            Value::Object(payload) => payload,
            _ => RawRegistryPayload::new(),
        });
    }

    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|body| match body.get("message") {
            Some(Value::String(message)) => Some(message.clone()),
            _ => None,
        });

    Err(RegistryError::NotFound { status, message })
}
