//! OpenCNPJ public registry provider.

use crate::error::{RegistryError, Result};
use crate::lookup::{interpret_response, CompanyLookup};
use crate::normalizer::RawRegistryPayload;
use async_trait::async_trait;
use eros_core::{Cnpj, RegistryConfig};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for `GET {base_url}/{cnpj}` on the OpenCNPJ API.
///
/// No authentication headers are sent.
pub struct OpenCnpjClient {
    client: Client,
    base_url: String,
}

impl OpenCnpjClient {
    /// Create a client from registry settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| RegistryError::Client(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the request URL for a CNPJ.
    #[must_use]
    pub fn url_for(&self, cnpj: &Cnpj) -> String {
        format!("{}/{}", self.base_url, cnpj.as_str())
    }
}

#[async_trait]
impl CompanyLookup for OpenCnpjClient {
    async fn lookup(&self, cnpj: &Cnpj) -> Result<RawRegistryPayload> {
        let url = self.url_for(cnpj);
        debug!(%cnpj, %url, "querying registry");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        // An unreadable error body still means the registry said no.
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(e) => {
                debug!(%cnpj, status = status.as_u16(), error = %e, "error body unreadable");
                Default::default()
            }
        };
        let status = status.as_u16();

        let result = interpret_response(status, &body);
        if let Err(e) = &result {
            warn!(%cnpj, status, error = %e, "registry lookup failed");
        }
        result
    }

    fn provider_id(&self) -> &'static str {
        "opencnpj"
    }
}
