//! Retrieval Value Objects
//!
//! Ranked chunks produced by the retriever and consumed by the prompt
//! assembler.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::entities::Chunk;

/// A chunk with its similarity to the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    /// The matched chunk
    pub chunk: Chunk,
    /// Cosine similarity to the query, in `[-1, 1]`
    pub score: f32,
}

impl ScoredChunk {
    /// Create a scored chunk
    pub fn new(chunk: Chunk, score: f32) -> Self {
        Self { chunk, score }
    }

    /// Ranking order: descending score, then ascending chunk id
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.chunk.id.cmp(&other.chunk.id))
    }
}

/// Sort hits into ranking order
pub fn rank(hits: &mut [ScoredChunk]) {
    hits.sort_by(ScoredChunk::rank_cmp);
}

/// Value Object: ordered retrieval outcome
///
/// ## Business Rules
///
/// - `hits` is in ranking order (descending score, ascending id on ties)
/// - every hit cleared the relevance threshold of the request
/// - an empty result means no relevant context, which is not an error
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// Ranked hits
    pub hits: Vec<ScoredChunk>,
    /// The language-restricted search found nothing and the whole corpus was searched
    pub language_fallback: bool,
}

impl RetrievalResult {
    /// Result with no hits
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether nothing relevant was found
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of hits
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Ids of the hits, in ranking order
    pub fn chunk_ids(&self) -> Vec<String> {
        self.hits.iter().map(|h| h.chunk.id.clone()).collect()
    }
}
