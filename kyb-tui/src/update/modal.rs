//! Modal updates

use crate::message::ModalMessage;
use crate::model::{App, Modal};
use kyb_core::types::PromptResponse;

pub fn update(app: &mut App, msg: ModalMessage) {
    match app.modal.active {
        Some(Modal::Prompt { .. }) => handle_prompt(app, msg),
        Some(Modal::Help | Modal::Error { .. }) => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
        }
        None => {}
    }
}

fn handle_prompt(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            if !app.modal.answer(PromptResponse::cancelled()) {
                log::debug!("Prompt cancelled after the session stopped listening");
            }
        }
        ModalMessage::Confirm => {
            if !app.modal.submit() {
                log::debug!("Prompt answered after the session stopped listening");
            }
        }
        ModalMessage::Input(c) => {
            if let Some(input) = app.modal.input_mut() {
                input.push(c);
            }
        }
        ModalMessage::Backspace => {
            if let Some(input) = app.modal.input_mut() {
                input.pop();
            }
        }
    }
}
