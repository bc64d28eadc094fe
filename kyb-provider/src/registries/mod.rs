//! Registry client implementations

mod brand;
mod company;
mod wire;

pub use brand::BrandRegistry;
pub use company::CompanyRegistry;

use std::time::Duration;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::types::{LookupPayload, RegistryConfig};

/// HTTP plumbing shared by both registries: one configured client, one endpoint.
pub(crate) struct RegistryEndpoint {
    client: reqwest::Client,
    config: RegistryConfig,
}

impl RegistryEndpoint {
    pub(crate) fn new(provider: &str, config: RegistryConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ProviderError::NetworkError {
                provider: provider.to_string(),
                detail: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client, config })
    }

    /// POST a JSON body and normalize the envelope that comes back.
    pub(crate) async fn post<B>(&self, provider: &str, body: &B) -> Result<LookupPayload>
    where
        B: serde::Serialize + Sync,
    {
        let body = HttpUtils::to_json_body(body, provider)?;
        let mut request = self
            .client
            .post(&self.config.base_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key);
        }

        let text =
            HttpUtils::execute_request(request, provider, "POST", &self.config.base_url).await?;
        let envelope: wire::Envelope = HttpUtils::parse_json(&text, provider)?;
        Ok(envelope.into_payload())
    }
}
