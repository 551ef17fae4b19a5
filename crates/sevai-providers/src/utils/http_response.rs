//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! Status codes are mapped onto the domain error classes so the retry helper
//! can tell transient failures from final ones.

use crate::constants::HTTP_ERROR_BODY_MAX_CHARS;
use reqwest::Response;
use serde::de::DeserializeOwned;
use sevai_domain::error::{Error, Result};
use std::time::Duration;

/// Markers of a content-policy refusal in an error body
const POLICY_MARKERS: &[&str] = &["content_filter", "content_policy", "moderation", "flagged"];

/// Which API an HTTP call belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiService {
    /// Embeddings endpoint
    Embedding,
    /// Chat completions endpoint
    Completion,
}

impl ApiService {
    /// Service-specific "unavailable" error
    pub fn unavailable(self, message: String) -> Error {
        match self {
            Self::Embedding => Error::embedding_unavailable(message),
            Self::Completion => Error::completion_unavailable(message),
        }
    }
}

fn mentions_policy(body: &str) -> bool {
    let body = body.to_lowercase();
    POLICY_MARKERS.iter().any(|m| body.contains(m))
}

fn truncate_body(body: &str) -> String {
    body.chars().take(HTTP_ERROR_BODY_MAX_CHARS).collect()
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    /// * `service` - API the response belongs to
    ///
    /// # Returns
    /// Parsed JSON body on success, or the error class of the status
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
        service: ApiService,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::status_error(
                status.as_u16(),
                &error_text,
                provider_name,
                service,
            ));
        }

        response.json().await.map_err(|e| {
            service.unavailable(format!("{provider_name} response parse failed: {e}"))
        })
    }

    /// Map a non-success status onto a domain error
    ///
    /// - 401/403: `Authentication`
    /// - 408/429/5xx: service unavailable (transient)
    /// - 400/422 mentioning a content policy on completions: `CompletionRejected`
    /// - anything else: `InvalidArgument`
    pub fn status_error(code: u16, body: &str, provider_name: &str, service: ApiService) -> Error {
        let details = truncate_body(body);
        match code {
            401 | 403 => {
                Error::authentication(format!("{provider_name} authentication failed: {details}"))
            }
            408 | 429 => service.unavailable(format!(
                "{provider_name} rate limited or timed out ({code}): {details}"
            )),
            500..=599 => {
                service.unavailable(format!("{provider_name} server error ({code}): {details}"))
            }
            400 | 422 if service == ApiService::Completion && mentions_policy(body) => {
                Error::completion_rejected(format!("{provider_name} refused the prompt: {details}"))
            }
            _ => Error::invalid_argument(format!(
                "{provider_name} request failed ({code}): {details}"
            )),
        }
    }

    /// Map a transport failure (no response) onto a domain error
    pub fn transport_error(
        error: reqwest::Error,
        provider_name: &str,
        service: ApiService,
        timeout: Duration,
    ) -> Error {
        let message = if error.is_timeout() {
            format!("{provider_name} request timed out after {timeout:?}")
        } else {
            format!("{provider_name} HTTP request failed")
        };
        match service {
            ApiService::Embedding => Error::embedding_unavailable_with_source(message, error),
            ApiService::Completion => Error::completion_unavailable_with_source(message, error),
        }
    }
}
