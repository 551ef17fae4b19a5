//! Chunk Entity
//!
//! The unit of retrievable text. Chunks are produced by the normalizer from
//! source records, embedded by the indexer and returned by the retriever.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::value_objects::Language;

/// Number of hex characters of the identity digest kept in a chunk id
const CHUNK_ID_DIGEST_LEN: usize = 16;

/// Shape of the record a chunk was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Government department description
    Department,
    /// Welfare scheme description
    Scheme,
    /// Citizen service description
    Service,
    /// Question/answer pair
    Qa,
}

impl RecordKind {
    /// Stable lowercase name, used in chunk ids and prompts
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Scheme => "scheme",
            Self::Service => "service",
            Self::Qa => "qa",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source fields carried alongside the chunk text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Record shape the chunk came from
    pub kind: RecordKind,
    /// Language tag of the chunk text
    pub language: Language,
    /// File or logical source the record was loaded from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    /// Owning department, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Scheme or service name, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme_name: Option<String>,
    /// Question of a Q&A chunk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl ChunkMetadata {
    /// Metadata with only kind and language set
    pub fn new(kind: RecordKind, language: Language) -> Self {
        Self {
            kind,
            language,
            source_file: None,
            department: None,
            scheme_name: None,
            question: None,
        }
    }
}

/// Core Entity: retrievable text with metadata
///
/// ## Business Rules
///
/// - `id` is derived from the source record, so re-ingesting the same record
///   yields the same id
/// - Chunks are never mutated; re-ingestion replaces them wholesale
///
/// ## Example
///
/// ```rust
/// use sevai_domain::entities::{Chunk, ChunkMetadata, RecordKind};
/// use sevai_domain::value_objects::Language;
///
/// let chunk = Chunk::new(
///     "scheme-en-0123456789abcdef",
///     "Scheme: Magalir Vidiyal Payanam. Benefits: free bus travel for women.",
///     ChunkMetadata::new(RecordKind::Scheme, Language::English),
/// );
/// assert_eq!(chunk.language(), Language::English);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Stable identifier derived from the source record
    pub id: String,
    /// Normalized text content
    pub text: String,
    /// Source fields
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Create a chunk
    pub fn new(id: impl Into<String>, text: impl Into<String>, metadata: ChunkMetadata) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata,
        }
    }

    /// Language tag of the chunk
    pub fn language(&self) -> Language {
        self.metadata.language
    }

    /// SHA-256 digest of the text, hex encoded
    ///
    /// The index stores it next to the embedding to detect unchanged chunks.
    pub fn text_digest(&self) -> String {
        text_digest(&self.text)
    }
}

/// SHA-256 digest of a text, hex encoded
pub fn text_digest(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// Derive a stable chunk id from the identity fields of a record
///
/// The id has the form `{kind}-{lang}-{digest}`, where the digest covers the
/// identity parts in order. Parts are separated by a unit separator so that
/// `["ab", "c"]` and `["a", "bc"]` hash differently.
pub fn stable_chunk_id(kind: RecordKind, language: Language, identity: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in identity {
        hasher.update(part.trim().as_bytes());
        hasher.update([0x1f]);
    }
    let digest = hex::encode(hasher.finalize());
    format!(
        "{}-{}-{}",
        kind.as_str(),
        language.tag(),
        &digest[..CHUNK_ID_DIGEST_LEN]
    )
}
