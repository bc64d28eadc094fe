//! Brand / trademark registry client

use async_trait::async_trait;

use super::wire::BrandRequest;
use super::RegistryEndpoint;
use crate::error::{ProviderError, Result};
use crate::traits::RecordRegistry;
use crate::types::{LookupPayload, RegistryConfig, RegistryKind, RegistryQuery};

/// Brand registry.
///
/// Sends `{"name": <brand>}`. Successful records may carry nested lists of
/// procedures and of products/services.
pub struct BrandRegistry {
    endpoint: RegistryEndpoint,
}

impl BrandRegistry {
    pub fn new(config: RegistryConfig) -> Result<Self> {
        Ok(Self {
            endpoint: RegistryEndpoint::new(RegistryKind::Brand.id(), config)?,
        })
    }
}

#[async_trait]
impl RecordRegistry for BrandRegistry {
    fn id(&self) -> &'static str {
        RegistryKind::Brand.id()
    }

    async fn search(&self, query: &RegistryQuery) -> Result<LookupPayload> {
        if query.is_blank() {
            return Err(ProviderError::InvalidQuery {
                provider: self.id().to_string(),
                detail: "brand name is empty".to_string(),
            });
        }

        log::info!("[{}] Searching brand '{}'", self.id(), query.name);
        let body = BrandRequest {
            name: query.name.trim(),
        };
        self.endpoint.post(self.id(), &body).await
    }
}
