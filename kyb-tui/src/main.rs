//! KYB Explorer TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: KYB session running on a tokio runtime (`backend/`)
//!
//! The session task talks to the UI only through [`backend::BackendEvent`]s:
//! every prompt arrives with a oneshot sender the UI answers when the user
//! presses Enter or Esc.

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::time::Duration;

use anyhow::Result;

use backend::{Backend, ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<()> {
    // 1. Configuration (a broken file falls back to defaults, reported later)
    let config_service = LocalConfigService::new();
    let (config, config_warning) = match config_service.load() {
        Ok(config) => (config, None),
        Err(e) => (backend::AppConfig::default(), Some(format!("{e:#}"))),
    };

    // 2. Logging goes to a file; the terminal belongs to the UI
    init_logging()?;
    tracing::info!("Starting KYB explorer");
    if let Some(ref warning) = config_warning {
        tracing::warn!("Using default configuration: {warning}");
    }

    i18n::set_language(i18n::Language::from_code(&config.language).unwrap_or_default());
    view::theme::set_theme(config.theme);

    // 3. Runtime and session backend
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let mut backend = Backend::new(runtime.handle().clone(), &config)?;

    // 4. Terminal
    install_panic_hook();
    let mut terminal = init_terminal()?;

    let mut app = model::App::new();
    if config_warning.is_some() {
        app.set_status(i18n::t().status.config_fallback);
    }

    // 5. Main loop
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 6. Restore terminal whatever happened
    restore_terminal(&mut terminal)?;

    drop(backend);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("KYB explorer stopped");

    result
}
