use serde::{Deserialize, Serialize};

/// Unified error type for all registry lookups.
///
/// Each variant includes a `provider` field identifying which registry produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// Registry calls are never retried: the caller turns any of these into an
/// "unavailable" lookup result and moves on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Registry that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Registry that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The registry answered with a non-success HTTP status.
    ///
    /// Application-level status codes inside a successful response are not errors;
    /// they travel inside [`LookupPayload`](crate::LookupPayload).
    HttpStatus {
        /// Registry that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// Failed to parse the registry's response.
    ParseError {
        /// Registry that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Registry that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The query cannot be sent (e.g. empty name).
    InvalidQuery {
        /// Registry that rejected the query.
        provider: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ProviderError {
    /// Whether the error is expected behavior (bad user input, registry said no),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidQuery { .. } => true,
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Registry id that produced the error.
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::SerializationError { provider, .. }
            | Self::InvalidQuery { provider, .. } => provider,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                provider, status, ..
            } => {
                write!(f, "[{provider}] HTTP {status}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::InvalidQuery { provider, detail } => {
                write!(f, "[{provider}] Invalid query: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_provider_prefix() {
        let e = ProviderError::NetworkError {
            provider: "company".into(),
            detail: "connection refused".into(),
        };
        assert_eq!(e.to_string(), "[company] Network error: connection refused");
    }

    #[test]
    fn client_http_errors_are_expected() {
        let e = ProviderError::HttpStatus {
            provider: "brand".into(),
            status: 404,
            body: String::new(),
        };
        assert!(e.is_expected());
    }

    #[test]
    fn server_http_errors_are_not_expected() {
        let e = ProviderError::HttpStatus {
            provider: "brand".into(),
            status: 500,
            body: String::new(),
        };
        assert!(!e.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ProviderError::Timeout {
            provider: "company".into(),
            detail: "10s".into(),
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "Timeout");
        assert_eq!(json["provider"], "company");
    }
}
