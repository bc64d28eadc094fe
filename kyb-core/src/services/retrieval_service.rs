//! Parallel registry retrieval

use std::sync::Arc;
use std::time::Instant;

use futures::future::join;
use tokio::time::timeout;

use crate::services::ServiceContext;
use crate::traits::RecordRegistry;
use crate::types::{JoinedResult, LookupResult, RegistryQuery};

/// Queries the company and brand registries concurrently.
pub struct RetrievalService {
    ctx: Arc<ServiceContext>,
}

impl RetrievalService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Run both lookups and wait until both have settled.
    ///
    /// A missing or blank `secondary` query yields `NotRequested` without
    /// calling the brand registry. A failed call never cancels the other one.
    pub async fn retrieve(
        &self,
        primary: &RegistryQuery,
        secondary: Option<&RegistryQuery>,
    ) -> JoinedResult {
        let first = self.lookup(self.ctx.company_registry.as_ref(), primary);
        let second = async {
            match secondary.filter(|q| !q.is_blank()) {
                Some(query) => self.lookup(self.ctx.brand_registry.as_ref(), query).await,
                None => {
                    log::debug!("No brand query, skipping brand registry");
                    LookupResult::not_requested()
                }
            }
        };

        let (first, second) = join(first, second).await;
        JoinedResult { first, second }
    }

    async fn lookup(&self, registry: &dyn RecordRegistry, query: &RegistryQuery) -> LookupResult {
        let started = Instant::now();
        let search = registry.search(query);

        let result = match self.ctx.config.lookup_timeout {
            Some(limit) => match timeout(limit, search).await {
                Ok(result) => result,
                Err(_) => {
                    log::warn!(
                        "[{}] Lookup timed out after {}s",
                        registry.id(),
                        limit.as_secs()
                    );
                    return LookupResult::failed(format!("timed out after {}s", limit.as_secs()));
                }
            },
            None => search.await,
        };

        log::debug!(
            "[{}] Lookup settled in {}ms",
            registry.id(),
            started.elapsed().as_millis()
        );

        match result {
            Ok(payload) => LookupResult::Ok(payload),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Lookup failed: {e}");
                } else {
                    log::error!("Lookup failed: {e}");
                }
                LookupResult::failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use tokio::sync::oneshot;

    use super::*;
    use crate::config::SessionConfig;
    use crate::test_utils::{company_record, MockRegistry};
    use crate::types::{LookupPayload, Unavailable};
    use kyb_provider::{ProviderError, STATUS_NO_MATCH, STATUS_OK};

    fn service(
        company: Arc<MockRegistry>,
        brand: Arc<MockRegistry>,
        config: SessionConfig,
    ) -> RetrievalService {
        RetrievalService::new(Arc::new(ServiceContext::new(company, brand, config)))
    }

    fn ok_payload() -> LookupPayload {
        LookupPayload::new(STATUS_OK, None, vec![company_record("Acme", "ACM010101")])
    }

    // ===== secondary query handling =====

    #[tokio::test]
    async fn missing_secondary_is_not_requested() {
        let company = Arc::new(MockRegistry::returning("company", ok_payload()));
        let brand = Arc::new(MockRegistry::returning("brand", ok_payload()));
        let svc = service(company.clone(), brand.clone(), SessionConfig::default());

        let joined = svc.retrieve(&RegistryQuery::by_name("Acme"), None).await;

        assert!(matches!(joined.first, LookupResult::Ok(_)));
        assert_eq!(
            joined.second,
            LookupResult::Unavailable(Unavailable::NotRequested)
        );
        assert_eq!(brand.call_count(), 0);
        assert_eq!(company.call_count(), 1);
    }

    #[tokio::test]
    async fn blank_secondary_is_not_requested() {
        let company = Arc::new(MockRegistry::returning("company", ok_payload()));
        let brand = Arc::new(MockRegistry::returning("brand", ok_payload()));
        let svc = service(company, brand.clone(), SessionConfig::default());

        let joined = svc
            .retrieve(
                &RegistryQuery::by_name("Acme"),
                Some(&RegistryQuery::by_name("  ")),
            )
            .await;

        assert_eq!(joined.second, LookupResult::not_requested());
        assert_eq!(brand.call_count(), 0);
    }

    // ===== partial failure =====

    #[tokio::test]
    async fn primary_failure_does_not_hide_secondary_success() {
        let company = Arc::new(MockRegistry::failing(
            "company",
            ProviderError::NetworkError {
                provider: "company".into(),
                detail: "connection refused".into(),
            },
        ));
        let brand = Arc::new(MockRegistry::returning(
            "brand",
            LookupPayload::new(STATUS_NO_MATCH, Some("No brand".into()), vec![]),
        ));
        let svc = service(company, brand, SessionConfig::default());

        let joined = svc
            .retrieve(
                &RegistryQuery::by_name("Acme"),
                Some(&RegistryQuery::by_name("Acme")),
            )
            .await;

        let LookupResult::Unavailable(Unavailable::Failed(reason)) = &joined.first else {
            unreachable!("primary should have failed");
        };
        assert!(reason.contains("connection refused"));
        // A 204 payload is still a successful call at this layer.
        assert_eq!(joined.second.payload().unwrap().status, STATUS_NO_MATCH);
    }

    #[tokio::test]
    async fn early_failure_waits_for_the_slower_lookup() {
        let company = Arc::new(MockRegistry::failing(
            "company",
            ProviderError::NetworkError {
                provider: "company".into(),
                detail: "connection reset".into(),
            },
        ));
        let brand = Arc::new(
            MockRegistry::returning(
                "brand",
                LookupPayload::new(STATUS_OK, None, vec![company_record("Acme", "ACM010101")]),
            )
            .delayed(Duration::from_millis(50)),
        );
        let svc = service(company, brand.clone(), SessionConfig::default());

        let joined = svc
            .retrieve(
                &RegistryQuery::by_name("Acme"),
                Some(&RegistryQuery::by_name("Acme")),
            )
            .await;

        assert!(matches!(
            joined.first,
            LookupResult::Unavailable(Unavailable::Failed(_))
        ));
        assert_eq!(joined.second.payload().unwrap().records.len(), 1);
        assert_eq!(brand.call_count(), 1);
    }

    #[tokio::test]
    async fn queries_are_forwarded_verbatim() {
        let company = Arc::new(MockRegistry::returning("company", ok_payload()));
        let brand = Arc::new(MockRegistry::returning("brand", ok_payload()));
        let svc = service(company.clone(), brand.clone(), SessionConfig::default());

        svc.retrieve(
            &RegistryQuery::by_name_and_id("Acme", Some("ACM010101".into())),
            Some(&RegistryQuery::by_name("Acme Brand")),
        )
        .await;

        assert_eq!(
            company.queries().await,
            vec![RegistryQuery::by_name_and_id("Acme", Some("ACM010101".into()))]
        );
        assert_eq!(brand.queries().await, vec![RegistryQuery::by_name("Acme Brand")]);
    }

    // ===== concurrency =====

    #[tokio::test]
    async fn lookups_run_concurrently() {
        // The company call can only finish once the brand call has started,
        // so a sequential implementation would hang.
        let (tx, rx) = oneshot::channel();
        let company = Arc::new(MockRegistry::returning("company", ok_payload()).waiting_on(rx));
        let brand = Arc::new(MockRegistry::returning("brand", ok_payload()).signalling(tx));
        let svc = service(
            company,
            brand,
            SessionConfig {
                lookup_timeout: None,
                ..SessionConfig::default()
            },
        );

        let joined = tokio::time::timeout(
            Duration::from_secs(5),
            svc.retrieve(
                &RegistryQuery::by_name("Acme"),
                Some(&RegistryQuery::by_name("Acme")),
            ),
        )
        .await
        .unwrap();

        assert!(matches!(joined.first, LookupResult::Ok(_)));
        assert!(matches!(joined.second, LookupResult::Ok(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn hung_lookup_times_out_as_failed() {
        let company = Arc::new(
            MockRegistry::returning("company", ok_payload()).delayed(Duration::from_secs(60)),
        );
        let brand = Arc::new(MockRegistry::returning("brand", ok_payload()));
        let svc = service(
            company,
            brand,
            SessionConfig {
                lookup_timeout: Some(Duration::from_secs(2)),
                ..SessionConfig::default()
            },
        );

        let joined = svc
            .retrieve(
                &RegistryQuery::by_name("Acme"),
                Some(&RegistryQuery::by_name("Acme")),
            )
            .await;

        assert!(matches!(
            joined.first,
            LookupResult::Unavailable(Unavailable::Failed(_))
        ));
        assert!(matches!(joined.second, LookupResult::Ok(_)));
    }
}
