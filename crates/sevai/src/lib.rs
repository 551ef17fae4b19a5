//! # Sevai
//!
//! A bilingual (English/Tamil) retrieval-augmented assistant answering
//! questions about government schemes, services and departments.
//!
//! This crate is the public facade: it re-exports every layer and hosts the
//! `sevai` command line interface.
//!
//! ## Example
//!
//! ```rust
//! use sevai::domain::value_objects::Language;
//! use sevai::application::domain_services::detect;
//!
//! assert_eq!(detect("பெண்களுக்கு இலவச பேருந்து பயணம் உள்ளதா?"), Language::Tamil);
//! assert_eq!(detect("Is there free bus travel for women?"), Language::English);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, errors and provider ports
//! - `application` - normalization, language detection, prompt assembly and the use cases
//! - `providers` - hashing/OpenAI embeddings, OpenRouter/OpenAI completions, vector stores
//! - `infrastructure` - configuration, logging, corpus loading and wiring
//! - `cli` - the `sevai` command line interface

pub mod cli;

/// Domain layer - core business types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use sevai_domain::*;
}

/// Application layer - text services and use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use sevai_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use sevai_providers::*;
}

/// Infrastructure layer - config, logging and composition root
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use sevai_infrastructure::*;
}

pub use cli::{AskOutcome, Cli, Command, run};
