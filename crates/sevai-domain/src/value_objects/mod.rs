//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Language`] | English or Tamil |
//! | [`Embedding`] | Vector representation of chunk or query text |
//! | [`Query`] | User question with its detected language |
//! | [`RetrievalResult`] | Ranked chunks above the relevance threshold |
//! | [`Prompt`] | Instruction, context and query for the completion backend |
//! | [`Answer`] | Generated response with its sources |

/// Semantic embedding value objects
pub mod embedding;
/// Generation parameters and answers
pub mod generation;
/// Language identifier
pub mod language;
/// Assembled prompt
pub mod prompt;
/// User query
pub mod query;
/// Retrieval results
pub mod retrieval;

pub use embedding::{Embedding, cosine_similarity};
pub use generation::{Answer, GenerationParams};
pub use language::Language;
pub use prompt::Prompt;
pub use query::Query;
pub use retrieval::{RetrievalResult, ScoredChunk, rank};
