//! Session configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::EmptyRequiredPolicy;

/// Default per-lookup timeout.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 15;

/// Tunables of one KYB session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Behaviour on an empty answer to a required step
    #[serde(default)]
    pub empty_required_policy: EmptyRequiredPolicy,

    /// Upper bound for each registry call; `None` waits indefinitely
    #[serde(
        rename = "lookup_timeout_secs",
        default = "default_lookup_timeout",
        with = "duration_secs"
    )]
    pub lookup_timeout: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            empty_required_policy: EmptyRequiredPolicy::default(),
            lookup_timeout: default_lookup_timeout(),
        }
    }
}

#[allow(clippy::unnecessary_wraps)]
fn default_lookup_timeout() -> Option<Duration> {
    Some(Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS))
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_some(&d.as_secs()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_secs))
    }
}
