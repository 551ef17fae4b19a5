//! Unit tests for the Chunk entity and its identity helpers

use sevai_domain::entities::{stable_chunk_id, text_digest};
use sevai_domain::{Chunk, ChunkMetadata, Language, RecordKind};

#[test]
fn test_chunk_creation() {
    let mut metadata = ChunkMetadata::new(RecordKind::Scheme, Language::English);
    metadata.scheme_name = Some("Magalir Vidiyal Payanam".to_string());
    let chunk = Chunk::new(
        "scheme-en-0011223344556677",
        "Scheme: Magalir Vidiyal Payanam",
        metadata,
    );

    assert_eq!(chunk.language(), Language::English);
    assert_eq!(chunk.metadata.kind, RecordKind::Scheme);
    assert_eq!(
        chunk.metadata.scheme_name.as_deref(),
        Some("Magalir Vidiyal Payanam")
    );
}

#[test]
fn test_stable_chunk_id_format() {
    let id = stable_chunk_id(RecordKind::Qa, Language::Tamil, &["faq.json", "q1"]);
    assert!(id.starts_with("qa-ta-"));
    assert_eq!(id.len(), "qa-ta-".len() + 16);
}

#[test]
fn test_stable_chunk_id_is_deterministic() {
    let a = stable_chunk_id(RecordKind::Scheme, Language::English, &["s.json", "X"]);
    let b = stable_chunk_id(RecordKind::Scheme, Language::English, &["s.json", " X "]);
    assert_eq!(a, b);
}

#[test]
fn test_stable_chunk_id_separates_parts() {
    let a = stable_chunk_id(RecordKind::Scheme, Language::English, &["ab", "c"]);
    let b = stable_chunk_id(RecordKind::Scheme, Language::English, &["a", "bc"]);
    assert_ne!(a, b);
}

#[test]
fn test_text_digest_tracks_text() {
    let chunk = Chunk::new(
        "id",
        "free bus travel",
        ChunkMetadata::new(RecordKind::Scheme, Language::English),
    );
    assert_eq!(chunk.text_digest(), text_digest("free bus travel"));
    assert_ne!(chunk.text_digest(), text_digest("free bus travel."));
    assert_eq!(chunk.text_digest().len(), 64);
}

#[test]
fn test_metadata_skips_absent_fields() {
    let metadata = ChunkMetadata::new(RecordKind::Department, Language::Tamil);
    let json = serde_json::to_value(&metadata).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"kind": "department", "language": "ta"})
    );
}
