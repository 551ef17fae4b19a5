//! Common helpers for API providers
//!
//! Shared constructor patterns used by the embedding and completion clients.

/// Common constructor patterns used by API providers
pub mod constructor {
    /// Template for validating and normalizing API keys
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Template for validating and normalizing URLs
    ///
    /// Blank URLs count as absent; a trailing slash is removed so paths can
    /// be appended with `format!("{base}/...")`.
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }

    /// Get effective URL with fallback to default
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url.map_or_else(|| default_url.to_string(), |url| url.trim().to_string())
    }
}
