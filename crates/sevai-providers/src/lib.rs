//! # Sevai - Provider Implementations
//!
//! This crate contains all user-selectable provider implementations following
//! Clean Architecture principles. Each provider implements a port (trait)
//! defined in `sevai-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Hashing (local), OpenAI-compatible |
//! | Completion | `CompletionProvider` | OpenAI-compatible (OpenRouter default) |
//! | Vector Store | `VectorStoreProvider` | InMemory, Filesystem |
//!
//! ## Feature Flags
//!
//! Each network or disk backed provider can be disabled for minimal builds:
//!
//! ```toml
//! [dependencies]
//! sevai-providers = { version = "0.1", default-features = false, features = ["vectorstore-filesystem"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use sevai_providers::embedding::HashingEmbeddingProvider;
//! use sevai_providers::vector_store::InMemoryVectorStoreProvider;
//! ```

// Re-export sevai-domain types commonly used with providers
pub use sevai_domain::error::{Error, Result};
pub use sevai_domain::ports::providers::{
    CompletionProvider, EmbeddingProvider, VectorStoreProvider,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` trait for local and API embeddings.
pub mod embedding;

/// Completion provider implementations
///
/// Implements `CompletionProvider` trait for chat completion APIs.
pub mod completion;

/// Vector store provider implementations
///
/// Implements `VectorStoreProvider` trait for chunk storage backends.
pub mod vector_store;

/// HTTP client configuration
pub mod http;
