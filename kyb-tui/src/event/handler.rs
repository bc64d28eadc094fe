//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use kyb_core::services::SubListKind;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, BrowserMessage, ModalMessage};
use crate::model::{App, Modal, Page};

/// Poll for an input event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Map an input event to a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize redraws on the next tick
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Windows terminals also report Release and Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    // Some terminals report '?' with SHIFT
    if DefaultKeymap::HELP.matches(&key)
        || (key.code == KeyCode::Char('?') && key.modifiers == KeyModifiers::SHIFT)
    {
        return AppMessage::ShowHelp;
    }

    match app.current_page {
        Page::Home => handle_home_keys(key),
        Page::Results => handle_results_keys(key),
    }
}

fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    match modal {
        Modal::Prompt { expects_text, .. } => match key.code {
            KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            KeyCode::Backspace if *expects_text => AppMessage::Modal(ModalMessage::Backspace),
            KeyCode::Char(c)
                if *expects_text
                    && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT) =>
            {
                AppMessage::Modal(ModalMessage::Input(c))
            }
            _ => AppMessage::Noop,
        },
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => AppMessage::Modal(ModalMessage::Close),
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
    }
}

fn handle_home_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CONFIRM.matches(&key) {
        AppMessage::StartSession
    } else {
        AppMessage::Noop
    }
}

fn handle_results_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::Browser(BrowserMessage::SwitchPanel);
    }
    if DefaultKeymap::PROCEDURES.matches(&key) {
        return AppMessage::Browser(BrowserMessage::Toggle(SubListKind::Procedures));
    }
    if DefaultKeymap::PRODUCTS.matches(&key) {
        return AppMessage::Browser(BrowserMessage::Toggle(SubListKind::ProductsAndServices));
    }

    match key.code {
        _ if DefaultKeymap::NEXT.matches(&key) => AppMessage::Browser(BrowserMessage::Next),
        _ if DefaultKeymap::PREV.matches(&key) => AppMessage::Browser(BrowserMessage::Prev),
        KeyCode::Char('l') => AppMessage::Browser(BrowserMessage::Next),
        KeyCode::Char('h') => AppMessage::Browser(BrowserMessage::Prev),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::oneshot;

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn prompting(expects_text: bool) -> App {
        let (tx, _rx) = oneshot::channel();
        let mut app = App::new();
        app.modal.show_prompt("Enter the RFC:", expects_text, tx);
        app
    }

    #[test]
    fn home_enter_starts_session() {
        let app = App::new();
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::StartSession
        ));
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit));
    }

    #[test]
    fn prompt_captures_text_keys() {
        let app = prompting(true);
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Modal(ModalMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        ));
    }

    #[test]
    fn notice_ignores_typing() {
        let app = prompting(false);
        assert!(matches!(handle_event(press(KeyCode::Char('a')), &app), AppMessage::Noop));
    }

    #[test]
    fn results_keys() {
        let mut app = App::new();
        app.current_page = Page::Results;

        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Browser(BrowserMessage::Next)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('h')), &app),
            AppMessage::Browser(BrowserMessage::Prev)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('2')), &app),
            AppMessage::Browser(BrowserMessage::Toggle(SubListKind::ProductsAndServices))
        ));
        assert!(matches!(handle_event(press(KeyCode::Esc), &app), AppMessage::GoBack));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
