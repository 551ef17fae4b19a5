//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`SourceRecord`] | Structured corpus record, tagged by `kind` |
//! | [`Chunk`] | Retrievable text derived from a record |

/// Retrievable text chunks
pub mod chunk;
/// Corpus record shapes
pub mod record;

pub use chunk::{Chunk, ChunkMetadata, RecordKind, stable_chunk_id, text_digest};
pub use record::{
    DepartmentRecord, ExtraFields, QaRecord, RawRecord, SchemeRecord, ServiceRecord,
    SourceRecord,
};
