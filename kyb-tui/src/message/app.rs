//! Main application message enum

use super::{BrowserMessage, ModalMessage};
use crate::backend::BackendEvent;

/// Application message
#[derive(Debug)]
pub enum AppMessage {
    /// Exit the application
    Quit,

    /// Leave the active sub-list, or close the results
    GoBack,

    ShowHelp,

    /// Begin a new KYB session
    StartSession,

    Modal(ModalMessage),

    /// Result browser navigation
    Browser(BrowserMessage),

    /// Event from the session task
    Backend(BackendEvent),

    ClearStatus,

    /// Ignored event
    Noop,
}
