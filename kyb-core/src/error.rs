//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use kyb_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The prompt channel itself failed (not a user cancel)
    #[error("Prompt channel failure: {0}")]
    Channel(String),

    /// The rendering surface failed to create a node
    #[error("Surface failure: {0}")]
    Surface(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, registry refusal, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Provider(e) => e.is_expected(),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_convert() {
        let err: CoreError = ProviderError::InvalidQuery {
            provider: "brand".into(),
            detail: "empty".into(),
        }
        .into();
        assert!(matches!(err, CoreError::Provider(_)));
        assert!(err.is_expected());
    }

    #[test]
    fn channel_failures_are_unexpected() {
        assert!(!CoreError::Channel("closed".into()).is_expected());
    }
}
