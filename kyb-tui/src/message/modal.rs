//! Modal messages

/// Modal dialog messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// Dismiss (a prompt counts as cancelled)
    Close,

    /// Submit the prompt / acknowledge a notice
    Confirm,

    /// Typed character
    Input(char),

    /// Delete the character before the cursor
    Backspace,
}
