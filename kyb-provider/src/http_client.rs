//! Generic HTTP client tools
//!
//! Shared request handling for the registry clients: sending, logging,
//! status checking and JSON parsing. Each registry builds its own
//! `RequestBuilder` (URL, headers, body).
//!
//! Requests are attempted exactly once. A failed lookup is reported to the
//! caller, which records it as unavailable; retrying is not this layer's job.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - registry id (for logging and errors)
    /// * `method_name` - request method name, used for logs
    /// * `url` - target URL, used for logs
    ///
    /// # Returns
    /// * `Ok(response_text)` on any 2xx status
    /// * `Err(ProviderError::NetworkError | Timeout)` on transport failure
    /// * `Err(ProviderError::HttpStatus)` on a non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<String, ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        if !(200..300).contains(&status_code) {
            log::warn!("[{provider_name}] HTTP {status_code}");
            return Err(ProviderError::HttpStatus {
                provider: provider_name.to_string(),
                status: status_code,
                body: truncate_for_log(&response_text),
            });
        }

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse a JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Serialize a request body.
    pub fn to_json_body<T>(body: &T, provider_name: &str) -> Result<String, ProviderError>
    where
        T: serde::Serialize,
    {
        serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        })
    }
}
