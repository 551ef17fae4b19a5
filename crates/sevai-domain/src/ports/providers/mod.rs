//! External Provider Ports
//!
//! Contracts for the external services the pipeline depends on.
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Text embedding generation services |
//! | VectorStoreProvider | Chunk storage and similarity search |
//! | CompletionProvider | Language-model response generation |

/// Completion provider port
pub mod completion;
/// Embedding provider port
pub mod embedding;
/// Vector store provider port
pub mod vector_store;

pub use completion::CompletionProvider;
pub use embedding::EmbeddingProvider;
pub use vector_store::{IndexedChunk, VectorStoreAdmin, VectorStoreProvider};
