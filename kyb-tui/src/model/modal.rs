//! Modal dialog state

use kyb_core::types::PromptResponse;
use tokio::sync::oneshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// A session prompt awaiting an answer
    Prompt {
        message: String,
        /// `false` for notices that only need acknowledging
        expects_text: bool,
        input: String,
    },

    Help,

    Error { title: String, message: String },
}

/// Modal state
///
/// While a prompt is open, `pending_reply` holds the sender the session task
/// is waiting on. It is answered exactly once: on submit, on cancel, or when a
/// newer prompt replaces it.
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
    pending_reply: Option<oneshot::Sender<PromptResponse>>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn show_prompt(
        &mut self,
        message: impl Into<String>,
        expects_text: bool,
        reply: oneshot::Sender<PromptResponse>,
    ) {
        if let Some(stale) = self.pending_reply.replace(reply) {
            let _ = stale.send(PromptResponse::cancelled());
        }
        self.show(Modal::Prompt {
            message: message.into(),
            expects_text,
            input: String::new(),
        });
    }

    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// Close without answering. A pending prompt stays pending.
    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_prompt(&self) -> bool {
        matches!(self.active, Some(Modal::Prompt { .. }))
    }

    pub fn has_pending_reply(&self) -> bool {
        self.pending_reply.is_some()
    }

    pub fn input_mut(&mut self) -> Option<&mut String> {
        match &mut self.active {
            Some(Modal::Prompt {
                expects_text: true,
                input,
                ..
            }) => Some(input),
            _ => None,
        }
    }

    /// Answer the open prompt and close it.
    ///
    /// Returns `false` if the session had already stopped listening.
    pub fn answer(&mut self, response: PromptResponse) -> bool {
        self.active = None;
        match self.pending_reply.take() {
            Some(reply) => reply.send(response).is_ok(),
            None => false,
        }
    }

    pub fn submit(&mut self) -> bool {
        let response = match &self.active {
            Some(Modal::Prompt {
                expects_text: true,
                input,
                ..
            }) => PromptResponse::submitted(input.clone()),
            _ => PromptResponse {
                submitted: true,
                text: None,
            },
        };
        self.answer(response)
    }
}
