//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and the provider
//! adapters. Application services depend on these traits only; concrete
//! providers are chosen by the infrastructure layer.

/// External provider ports
pub mod providers;

pub use providers::{
    CompletionProvider, EmbeddingProvider, IndexedChunk, VectorStoreAdmin, VectorStoreProvider,
};
