//! Backend layer: runs KYB sessions off the UI thread
//!
//! The UI loop is synchronous; sessions are async. A session task runs on the
//! tokio runtime and reports through an unbounded channel that the main loop
//! drains with `try_recv` on every tick.

mod config_service;
mod prompt_bridge;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use prompt_bridge::TuiPromptChannel;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use kyb_core::services::{ServiceContext, SessionOutcome, SessionService};
use kyb_core::types::PromptResponse;
use kyb_provider::{create_registry, RegistryKind};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};

use crate::i18n;

/// Messages from the session task to the UI
#[derive(Debug)]
pub enum BackendEvent {
    /// Show a prompt and answer through `reply`
    Prompt {
        message: String,
        expects_text: bool,
        reply: oneshot::Sender<PromptResponse>,
    },
    /// The session ended (completed or aborted)
    SessionFinished(SessionOutcome),
}

/// Owns the session service and the event channel.
pub struct Backend {
    runtime: Handle,
    service: Arc<SessionService>,
    events_tx: mpsc::UnboundedSender<BackendEvent>,
    events_rx: mpsc::UnboundedReceiver<BackendEvent>,
    running: Arc<AtomicBool>,
}

impl Backend {
    /// Build the registry clients and the session service.
    pub fn new(runtime: Handle, config: &AppConfig) -> Result<Self> {
        let company = create_registry(RegistryKind::Company, config.company_registry.clone())
            .context("cannot create company registry client")?;
        let brand = create_registry(RegistryKind::Brand, config.brand_registry.clone())
            .context("cannot create brand registry client")?;

        let ctx = Arc::new(ServiceContext::new(company, brand, config.session.clone()));
        let service = Arc::new(SessionService::new(ctx, &i18n::kyb_prompt_texts()));
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        log::info!(
            "Backend ready (company: {}, brand: {})",
            config.company_registry.base_url,
            config.brand_registry.base_url
        );

        Ok(Self {
            runtime,
            service,
            events_tx,
            events_rx,
            running: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Start a session unless one is already running.
    pub fn start_session(&self) -> bool {
        if self.running.swap(true, Ordering::SeqCst) {
            return false;
        }

        let service = self.service.clone();
        let events = self.events_tx.clone();
        let running = self.running.clone();

        self.runtime.spawn(async move {
            let channel = TuiPromptChannel::new(events.clone());
            let outcome = service.run(&channel).await;
            running.store(false, Ordering::SeqCst);
            if events.send(BackendEvent::SessionFinished(outcome)).is_err() {
                log::warn!("UI gone before the session finished");
            }
        });

        log::info!("KYB session started");
        true
    }

    /// Next pending event, if any.
    pub fn try_recv(&mut self) -> Option<BackendEvent> {
        self.events_rx.try_recv().ok()
    }
}
