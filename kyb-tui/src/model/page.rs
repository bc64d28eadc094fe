//! Page state

/// Page enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Welcome screen; a session is started from here
    #[default]
    Home,
    /// Company and brand panels of the last session
    Results,
}
