//! Lookup outcomes

use serde::Serialize;

pub use kyb_provider::{LookupPayload, Record, RecordValue, RegistryQuery};

/// Why a lookup produced no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "reason")]
pub enum Unavailable {
    /// No query was performed (nothing to search for).
    NotRequested,
    /// The call was attempted and failed (transport error, HTTP error, timeout).
    Failed(String),
}

/// Outcome of one registry call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value")]
pub enum LookupResult {
    Ok(LookupPayload),
    Unavailable(Unavailable),
}

impl LookupResult {
    pub fn not_requested() -> Self {
        Self::Unavailable(Unavailable::NotRequested)
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Unavailable(Unavailable::Failed(reason.into()))
    }

    pub fn payload(&self) -> Option<&LookupPayload> {
        match self {
            Self::Ok(payload) => Some(payload),
            Self::Unavailable(_) => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Both lookups' outcomes, produced only after both settled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedResult {
    /// Company registry
    pub first: LookupResult,
    /// Brand registry
    pub second: LookupResult,
}
