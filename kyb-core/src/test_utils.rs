//! Test helper module
//!
//! Provides mock collaborators and record factories.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use kyb_provider::{ProviderError, Result as ProviderResult};
use tokio::sync::{oneshot, Mutex};

use crate::error::{CoreError, CoreResult};
use crate::traits::{PromptChannel, RecordRegistry};
use crate::types::{LookupPayload, PromptResponse, Record, RecordValue, RegistryQuery};

// ===== MockPromptChannel =====

/// Prompt channel answering from a script.
///
/// Runs out of answers → channel failure.
pub struct MockPromptChannel {
    responses: Mutex<VecDeque<PromptResponse>>,
    prompts: Mutex<Vec<(String, bool)>>,
    /// If Some(n), every prompt after the first n fails
    fail_after: Mutex<Option<usize>>,
}

impl MockPromptChannel {
    pub fn new(responses: Vec<PromptResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
            fail_after: Mutex::new(None),
        }
    }

    pub async fn fail_after(&self, n: usize) {
        *self.fail_after.lock().await = Some(n);
    }

    /// Every `(message, expects_text)` shown so far.
    pub async fn prompts(&self) -> Vec<(String, bool)> {
        self.prompts.lock().await.clone()
    }

    pub async fn prompt_count(&self) -> usize {
        self.prompts.lock().await.len()
    }
}

#[async_trait]
impl PromptChannel for MockPromptChannel {
    async fn prompt(&self, message: &str, expects_text: bool) -> CoreResult<PromptResponse> {
        let mut prompts = self.prompts.lock().await;
        if let Some(n) = *self.fail_after.lock().await {
            if prompts.len() >= n {
                return Err(CoreError::Channel("mock channel closed".to_string()));
            }
        }
        prompts.push((message.to_string(), expects_text));

        self.responses
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| CoreError::Channel("no scripted response left".to_string()))
    }
}

// ===== MockRegistry =====

/// Registry returning a fixed outcome.
pub struct MockRegistry {
    id: &'static str,
    outcome: Result<LookupPayload, ProviderError>,
    delay: Option<Duration>,
    wait_for: Mutex<Option<oneshot::Receiver<()>>>,
    signal: Mutex<Option<oneshot::Sender<()>>>,
    calls: AtomicUsize,
    queries: Mutex<Vec<RegistryQuery>>,
}

impl MockRegistry {
    fn with_outcome(id: &'static str, outcome: Result<LookupPayload, ProviderError>) -> Self {
        Self {
            id,
            outcome,
            delay: None,
            wait_for: Mutex::new(None),
            signal: Mutex::new(None),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(id: &'static str, payload: LookupPayload) -> Self {
        Self::with_outcome(id, Ok(payload))
    }

    pub fn failing(id: &'static str, error: ProviderError) -> Self {
        Self::with_outcome(id, Err(error))
    }

    /// Sleep before answering.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Block each search until `rx` fires.
    #[must_use]
    pub fn waiting_on(mut self, rx: oneshot::Receiver<()>) -> Self {
        self.wait_for = Mutex::new(Some(rx));
        self
    }

    /// Fire `tx` as soon as a search starts.
    #[must_use]
    pub fn signalling(mut self, tx: oneshot::Sender<()>) -> Self {
        self.signal = Mutex::new(Some(tx));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn queries(&self) -> Vec<RegistryQuery> {
        self.queries.lock().await.clone()
    }
}

#[async_trait]
impl RecordRegistry for MockRegistry {
    fn id(&self) -> &'static str {
        self.id
    }

    async fn search(&self, query: &RegistryQuery) -> ProviderResult<LookupPayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().await.push(query.clone());

        if let Some(tx) = self.signal.lock().await.take() {
            let _ = tx.send(());
        }
        let rx = self.wait_for.lock().await.take();
        if let Some(rx) = rx {
            let _ = rx.await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.outcome.clone()
    }
}

// ===== Record factories =====

pub fn company_record(name: &str, rfc: &str) -> Record {
    Record::new()
        .with("name", RecordValue::scalar(name))
        .with("rfc", RecordValue::scalar(rfc))
}

/// Brand with `procedures` procedures and `products` product classes.
pub fn brand_record(name: &str, procedures: usize, products: usize) -> Record {
    let procedure_list = (1..=procedures)
        .map(|i| {
            RecordValue::Object(
                Record::new()
                    .with("description", RecordValue::scalar(format!("Procedure {i}")))
                    .with("date", RecordValue::scalar(format!("2020-01-{i:02}"))),
            )
        })
        .collect();
    let product_list = (1..=products)
        .map(|i| {
            RecordValue::Object(
                Record::new()
                    .with("class", RecordValue::scalar(i.to_string()))
                    .with("description", RecordValue::scalar(format!("Goods {i}"))),
            )
        })
        .collect();

    Record::new()
        .with("name", RecordValue::scalar(name))
        .with("procedures", RecordValue::List(procedure_list))
        .with("products_and_services", RecordValue::List(product_list))
}
