//! Update layer: state transitions
//!
//! `update` consumes one [`AppMessage`], mutates the [`App`] and returns the
//! side effect the main loop must carry out, if any. Keeping the backend out
//! of here lets every transition be tested without a runtime.

mod backend;
mod browser;
mod modal;

use crate::message::AppMessage;
use crate::model::{App, Page};

/// Side effect requested by an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    /// Spawn a session on the backend
    StartSession,
}

/// Handle an application message
pub fn update(app: &mut App, msg: AppMessage) -> Command {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::StartSession => {
            if app.session_active {
                app.set_status(crate::i18n::t().status.session_running);
            } else {
                return Command::StartSession;
            }
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Browser(browser_msg) => {
            browser::update(app, browser_msg);
        }

        AppMessage::Backend(event) => {
            backend::update(app, event);
        }

        AppMessage::GoBack => {
            if app.current_page == Page::Results {
                browser::go_back(app);
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }

    Command::None
}
