//! Domain Layer - Sevai
//!
//! Core types of the bilingual (English/Tamil) government-scheme assistant,
//! independent of any provider or framework.
//!
//! ## Architecture
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Corpus records and retrievable chunks |
//! | [`value_objects`] | Language, embeddings, queries, retrieval results, prompts |
//! | [`ports`] | Embedding, vector store and completion provider contracts |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Domain defaults shared by the other layers |

/// Domain constants
pub mod constants;
/// Domain entities
pub mod entities;
/// Error handling types
pub mod error;
/// Provider port interfaces
pub mod ports;
/// Value objects
pub mod value_objects;

pub use entities::{Chunk, ChunkMetadata, RawRecord, RecordKind, SourceRecord};
pub use error::{Error, Result};
pub use value_objects::{
    Answer, Embedding, GenerationParams, Language, Prompt, Query, RetrievalResult, ScoredChunk,
};
