//! Company registry client (search by legal name and RFC)

use async_trait::async_trait;

use super::wire::CompanyRequest;
use super::RegistryEndpoint;
use crate::error::{ProviderError, Result};
use crate::traits::RecordRegistry;
use crate::types::{LookupPayload, RegistryConfig, RegistryKind, RegistryQuery};
use crate::utils::log_sanitizer::mask_secret;

/// Company registry.
///
/// Sends `{"name": <legal name>, "id": <RFC or "">}`.
pub struct CompanyRegistry {
    endpoint: RegistryEndpoint,
}

impl CompanyRegistry {
    pub fn new(config: RegistryConfig) -> Result<Self> {
        Ok(Self {
            endpoint: RegistryEndpoint::new(RegistryKind::Company.id(), config)?,
        })
    }
}

#[async_trait]
impl RecordRegistry for CompanyRegistry {
    fn id(&self) -> &'static str {
        RegistryKind::Company.id()
    }

    async fn search(&self, query: &RegistryQuery) -> Result<LookupPayload> {
        if query.is_blank() {
            return Err(ProviderError::InvalidQuery {
                provider: self.id().to_string(),
                detail: "company name is empty".to_string(),
            });
        }

        let id = query.id.as_deref().unwrap_or_default();
        log::info!(
            "[{}] Searching company '{}' (rfc: {})",
            self.id(),
            query.name,
            if id.is_empty() { "-".to_string() } else { mask_secret(id) }
        );

        let body = CompanyRequest {
            name: query.name.trim(),
            id: id.trim(),
        };
        self.endpoint.post(self.id(), &body).await
    }
}
