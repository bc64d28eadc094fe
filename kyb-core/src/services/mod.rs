//! Business logic service layer

mod browser;
mod dialog_service;
mod navigator;
mod retrieval_service;
mod screen_builder;
mod session_service;

pub use browser::{BrowserTexts, PanelContent, PanelFocus, ResultBrowser, ResultPanel};
pub use dialog_service::DialogService;
pub use navigator::{ActiveList, HierarchicalNavigator, NavigationCursor};
pub use retrieval_service::RetrievalService;
pub use screen_builder::{RecordScreen, ScreenBuilder, SubListKind, SubScreenGroup};
pub use session_service::{SessionOutcome, SessionService};

use std::sync::Arc;

use crate::config::SessionConfig;
use crate::traits::RecordRegistry;

/// Service context - holds all dependencies
///
/// The platform layer creates this context and injects the registry clients.
pub struct ServiceContext {
    /// Company (legal name / RFC) registry
    pub company_registry: Arc<dyn RecordRegistry>,
    /// Brand / trademark registry
    pub brand_registry: Arc<dyn RecordRegistry>,
    /// Session tunables
    pub config: SessionConfig,
}

impl ServiceContext {
    /// Create a service context
    #[must_use]
    pub fn new(
        company_registry: Arc<dyn RecordRegistry>,
        brand_registry: Arc<dyn RecordRegistry>,
        config: SessionConfig,
    ) -> Self {
        Self {
            company_registry,
            brand_registry,
            config,
        }
    }
}
