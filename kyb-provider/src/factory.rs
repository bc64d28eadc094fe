use std::sync::Arc;

use crate::error::Result;
use crate::registries::{BrandRegistry, CompanyRegistry};
use crate::traits::RecordRegistry;
use crate::types::{RegistryConfig, RegistryKind};

/// Create a registry client instance
pub fn create_registry(
    kind: RegistryKind,
    config: RegistryConfig,
) -> Result<Arc<dyn RecordRegistry>> {
    match kind {
        RegistryKind::Company => Ok(Arc::new(CompanyRegistry::new(config)?)),
        RegistryKind::Brand => Ok(Arc::new(BrandRegistry::new(config)?)),
    }
}
