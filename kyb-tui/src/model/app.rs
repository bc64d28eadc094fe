//! Main application state

use super::{ModalState, Page, ResultsState};

/// Application state
#[derive(Debug)]
pub struct App {
    pub should_quit: bool,

    pub current_page: Page,

    /// Status bar message
    pub status_message: Option<String>,

    pub modal: ModalState,

    /// Present while the results page is shown
    pub results: Option<ResultsState>,

    /// A session task is running on the backend
    pub session_active: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            current_page: Page::Home,
            status_message: None,
            modal: ModalState::new(),
            results: None,
            session_active: false,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Show a finished session's results, replacing any previous ones.
    pub fn show_results(&mut self, results: ResultsState) {
        if let Some(previous) = self.results.replace(results) {
            previous.close();
        }
        self.current_page = Page::Results;
    }

    /// Drop the results and return to the home page.
    pub fn close_results(&mut self) {
        if let Some(results) = self.results.take() {
            results.close();
        }
        self.current_page = Page::Home;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
