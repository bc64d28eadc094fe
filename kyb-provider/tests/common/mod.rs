//! Shared helpers for live registry tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use kyb_provider::{create_registry, RecordRegistry, RegistryConfig, RegistryKind};

/// Skip the test when an environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_endpoint {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: environment variable {} is not set", $var);
                return;
            }
        )+
    };
}

/// Assert `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {:?}", res.as_ref().err());
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Test context wrapping a live registry client.
pub struct TestContext {
    pub registry: Arc<dyn RecordRegistry>,
    /// Name known to exist in the registry.
    pub known_name: String,
}

impl TestContext {
    fn from_env(kind: RegistryKind, url_var: &str, name_var: &str) -> Option<Self> {
        let base_url = env::var(url_var).ok()?;
        let known_name = env::var(name_var).ok()?;
        let mut config = RegistryConfig::new(base_url);
        config.api_key = env::var("KYB_API_KEY").ok();
        let registry = create_registry(kind, config).ok()?;
        Some(Self {
            registry,
            known_name,
        })
    }

    /// Company registry context (`KYB_COMPANY_URL`, `KYB_TEST_COMPANY`).
    pub fn company() -> Option<Self> {
        Self::from_env(RegistryKind::Company, "KYB_COMPANY_URL", "KYB_TEST_COMPANY")
    }

    /// Brand registry context (`KYB_BRAND_URL`, `KYB_TEST_BRAND`).
    pub fn brand() -> Option<Self> {
        Self::from_env(RegistryKind::Brand, "KYB_BRAND_URL", "KYB_TEST_BRAND")
    }
}

/// A name no registry should match.
pub fn unmatched_name() -> String {
    format!("zz-no-such-company-{}", std::process::id())
}
