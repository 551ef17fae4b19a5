//! HTTP Client Abstractions
//!
//! - `HttpClientConfig` - Configuration for the shared HTTP client
//! - `HttpResponseUtils` - Utilities for handling HTTP responses (re-exported from utils)

pub mod provider;

pub use crate::utils::{ApiService, HttpResponseUtils};
pub use provider::HttpClientConfig;
