//! KYB session: dialog, then one parallel retrieval

use std::sync::Arc;

use serde::Serialize;

use crate::services::{DialogService, RetrievalService, ServiceContext};
use crate::traits::PromptChannel;
use crate::types::{
    AbortReason, Collected, DialogOutcome, DialogScript, JoinedResult, KybPromptTexts,
    RegistryQuery, STEP_BRAND, STEP_COMPANY, STEP_RFC,
};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionOutcome {
    Completed {
        collected: Collected,
        results: JoinedResult,
    },
    Aborted(AbortReason),
}

/// One data-collection-and-lookup run.
pub struct SessionService {
    dialog: DialogService,
    retrieval: RetrievalService,
}

impl SessionService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, texts: &KybPromptTexts) -> Self {
        let dialog = DialogService::new(DialogScript::kyb(texts), ctx.config.empty_required_policy);
        Self {
            dialog,
            retrieval: RetrievalService::new(ctx),
        }
    }

    /// Collect the inputs, then query both registries exactly once.
    ///
    /// An aborted dialog never reaches the registries.
    pub async fn run(&self, channel: &dyn PromptChannel) -> SessionOutcome {
        let collected = match self.dialog.run(channel).await {
            DialogOutcome::Completed(collected) => collected,
            DialogOutcome::Aborted(reason) => {
                log::info!("KYB session aborted: {reason:?}");
                return SessionOutcome::Aborted(reason);
            }
        };

        let (company, brand) = queries(&collected);
        let results = self.retrieval.retrieve(&company, brand.as_ref()).await;
        log::info!(
            "KYB session finished (company unavailable: {}, brand unavailable: {})",
            results.first.is_unavailable(),
            results.second.is_unavailable()
        );

        SessionOutcome::Completed { collected, results }
    }
}

/// Company query (name + optional RFC) and brand query (only when given).
fn queries(collected: &Collected) -> (RegistryQuery, Option<RegistryQuery>) {
    let company = RegistryQuery::by_name_and_id(
        collected.value(STEP_COMPANY).unwrap_or_default(),
        collected.value(STEP_RFC).map(str::to_string),
    );
    let brand = collected.value(STEP_BRAND).map(RegistryQuery::by_name);
    (company, brand)
}
