use async_trait::async_trait;

use crate::error::Result;
use crate::types::{LookupPayload, RegistryQuery};

/// A remote registry that can be searched.
///
/// Implementations perform at most one request per call and never retry.
/// A successful call returns the registry's answer verbatim, whatever its
/// application-level status; only transport, HTTP and parse failures are errors.
#[async_trait]
pub trait RecordRegistry: Send + Sync {
    /// Registry identifier (used in logs and errors)
    fn id(&self) -> &'static str;

    /// Search the registry.
    async fn search(&self, query: &RegistryQuery) -> Result<LookupPayload>;
}
