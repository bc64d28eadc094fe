//! Modal prompt abstraction Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::PromptResponse;

/// Modal prompt channel
///
/// Platform implementation:
/// - TUI: `TuiPromptChannel` (modal dialog fed over an mpsc channel)
/// - Tests: `MockPromptChannel` (scripted answers)
#[async_trait]
pub trait PromptChannel: Send + Sync {
    /// Show `message` and wait for the user.
    ///
    /// A user cancel resolves with `submitted: false`; only a failure of the
    /// channel itself returns `Err` (`CoreError::Channel`).
    ///
    /// # Arguments
    /// * `message` - text to display
    /// * `expects_text` - whether a text input is shown
    async fn prompt(&self, message: &str, expects_text: bool) -> CoreResult<PromptResponse>;
}
