//! Prompt channel backed by the UI's modal dialog

use async_trait::async_trait;
use kyb_core::traits::PromptChannel;
use kyb_core::types::PromptResponse;
use kyb_core::{CoreError, CoreResult};
use tokio::sync::{mpsc, oneshot};

use super::BackendEvent;

/// Sends each prompt to the UI loop and waits for the modal's answer.
///
/// A user cancel arrives as `submitted: false`. If the UI side is gone
/// (receiver dropped, or the modal dropped without answering) the prompt fails
/// with [`CoreError::Channel`].
pub struct TuiPromptChannel {
    events: mpsc::UnboundedSender<BackendEvent>,
}

impl TuiPromptChannel {
    pub fn new(events: mpsc::UnboundedSender<BackendEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl PromptChannel for TuiPromptChannel {
    async fn prompt(&self, message: &str, expects_text: bool) -> CoreResult<PromptResponse> {
        let (reply, answer) = oneshot::channel();

        self.events
            .send(BackendEvent::Prompt {
                message: message.to_string(),
                expects_text,
                reply,
            })
            .map_err(|_| CoreError::Channel("UI event channel closed".to_string()))?;

        answer
            .await
            .map_err(|_| CoreError::Channel("prompt dropped without an answer".to_string()))
    }
}
