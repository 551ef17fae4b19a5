//! Application Layer - Sevai
//!
//! Implements the retrieval-augmented answering pipeline on top of the
//! domain ports.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains the pure text services (normalization, language detection, prompt assembly)
//! - Wraps external calls with a timeout and a single retry
//! - Orchestrates indexing, retrieval and answering use cases
//! - Has no dependencies on concrete providers or frameworks
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `sevai-domain`: For entities, value objects, errors and provider ports
//! - `tokio` for timeouts, `tracing` for logging

pub mod domain_services;
pub mod ports;
pub mod resilience;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use resilience::{RetryPolicy, ServiceKind, call_with_retry};
pub use use_cases::*;
