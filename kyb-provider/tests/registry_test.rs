//! Live registry integration tests
//!
//! Run with:
//! ```bash
//! KYB_COMPANY_URL=... KYB_TEST_COMPANY=... KYB_BRAND_URL=... KYB_TEST_BRAND=... \
//!     cargo test -p kyb-provider --test registry_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{unmatched_name, TestContext};
use kyb_provider::{
    create_registry, ProviderError, RegistryConfig, RegistryKind, RegistryQuery,
};

// ============ Offline ============

#[tokio::test]
async fn test_blank_query_rejected_without_request() {
    // Unroutable endpoint: the call must fail before any request is made.
    let registry = require_ok!(create_registry(
        RegistryKind::Brand,
        RegistryConfig::new("http://127.0.0.1:9/brand"),
    ));
    let result = registry.search(&RegistryQuery::by_name("  ")).await;
    assert!(
        matches!(result, Err(ProviderError::InvalidQuery { .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let mut config = RegistryConfig::new("http://127.0.0.1:9/company");
    config.request_timeout_secs = 2;
    let registry = require_ok!(create_registry(RegistryKind::Company, config));
    let result = registry
        .search(&RegistryQuery::by_name_and_id("Acme", None))
        .await;
    assert!(
        matches!(
            result,
            Err(ProviderError::NetworkError { .. } | ProviderError::Timeout { .. })
        ),
        "unexpected result: {result:?}"
    );
}

// ============ Company registry ============

#[tokio::test]
#[ignore]
async fn test_company_known_name() {
    skip_if_no_endpoint!("KYB_COMPANY_URL", "KYB_TEST_COMPANY");

    let Some(ctx) = TestContext::company() else {
        return;
    };
    let query = RegistryQuery::by_name_and_id(ctx.known_name.clone(), None);
    let payload = require_ok!(ctx.registry.search(&query).await);

    assert!(payload.is_ok(), "expected status 200, got {}", payload.status);
    assert!(!payload.records.is_empty(), "expected at least one record");
    println!("✓ company search returned {} records", payload.records.len());
}

#[tokio::test]
#[ignore]
async fn test_company_unmatched_name() {
    skip_if_no_endpoint!("KYB_COMPANY_URL", "KYB_TEST_COMPANY");

    let Some(ctx) = TestContext::company() else {
        return;
    };
    let query = RegistryQuery::by_name_and_id(unmatched_name(), None);
    let payload = require_ok!(ctx.registry.search(&query).await);

    assert!(payload.is_no_match(), "expected status 204, got {}", payload.status);
    assert!(payload.message.is_some(), "204 answers carry a message");
}

// ============ Brand registry ============

#[tokio::test]
#[ignore]
async fn test_brand_known_name() {
    skip_if_no_endpoint!("KYB_BRAND_URL", "KYB_TEST_BRAND");

    let Some(ctx) = TestContext::brand() else {
        return;
    };
    let payload = require_ok!(
        ctx.registry
            .search(&RegistryQuery::by_name(ctx.known_name.clone()))
            .await
    );

    assert!(payload.is_ok(), "expected status 200, got {}", payload.status);
    println!("✓ brand search returned {} records", payload.records.len());
}
