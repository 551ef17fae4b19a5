//! Shared fixtures for provider tests

use sevai_domain::entities::{Chunk, ChunkMetadata, RecordKind};
use sevai_domain::ports::providers::IndexedChunk;
use sevai_domain::value_objects::{Embedding, Language};

/// An indexed chunk with a hand-made vector
pub fn indexed(id: &str, language: Language, vector: Vec<f32>) -> IndexedChunk {
    let chunk = Chunk::new(
        id,
        format!("text of {id}"),
        ChunkMetadata::new(RecordKind::Scheme, language),
    );
    IndexedChunk::new(chunk, Embedding::new(vector, "test"))
}
