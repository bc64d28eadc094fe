//! Result browser messages

use kyb_core::services::SubListKind;

/// Navigation inside the results page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserMessage {
    Next,
    Prev,
    /// Move focus to the other registry panel
    SwitchPanel,
    /// Drill into (or back out of) a sub-list of the current brand
    Toggle(SubListKind),
}
