//! Embedding provider implementations
//!
//! | Provider | Backend | Feature |
//! |----------|---------|---------|
//! | [`HashingEmbeddingProvider`] | Local feature hashing, 384 dims | always |
//! | [`OpenAIEmbeddingProvider`] | OpenAI-compatible `/embeddings` | `embedding-openai` |

pub mod helpers;

pub mod hashing;
#[cfg(feature = "embedding-openai")]
pub mod openai;

pub use hashing::HashingEmbeddingProvider;
#[cfg(feature = "embedding-openai")]
pub use openai::OpenAIEmbeddingProvider;
