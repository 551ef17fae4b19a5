//! Application Service Port Interfaces
//!
//! Defines the port interfaces for application layer services.
//! These traits are the contracts that the use cases implement and that the
//! CLI and other surfaces depend on.

use async_trait::async_trait;
use serde_json::Value;
use sevai_domain::entities::{Chunk, RawRecord};
use sevai_domain::error::Result;
use sevai_domain::value_objects::{Answer, Prompt, Query, RetrievalResult};
use std::collections::HashMap;

// ============================================================================
// Indexing Service Interface
// ============================================================================

/// Indexing Service Interface
///
/// Defines the contract for building and maintaining the chunk index.
#[async_trait]
pub trait IndexingServiceInterface: Send + Sync {
    /// Embed and upsert chunks, skipping those whose text is unchanged
    async fn index_chunks(&self, collection: &str, chunks: Vec<Chunk>) -> Result<IndexingResult>;

    /// Normalize raw records, then index the resulting chunks
    async fn ingest_records(&self, collection: &str, records: &[RawRecord])
    -> Result<IndexingResult>;

    /// Drop a collection and everything in it
    async fn clear_collection(&self, collection: &str) -> Result<()>;

    /// Statistics of a collection, as reported by the vector store
    async fn collection_stats(&self, collection: &str) -> Result<HashMap<String, Value>>;
}

/// Result of an indexing operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexingResult {
    /// Raw records examined (zero when indexing chunks directly)
    pub records_seen: usize,
    /// Records rejected by the normalizer
    pub records_skipped: usize,
    /// Chunks received after normalization
    pub chunks_received: usize,
    /// Duplicate ids collapsed inside the batch
    pub duplicates: usize,
    /// Chunks already indexed with identical text
    pub chunks_unchanged: usize,
    /// Chunks embedded and upserted
    pub chunks_indexed: usize,
    /// Non-fatal problems (skipped records, collapsed duplicates)
    pub errors: Vec<String>,
}

// ============================================================================
// Retrieval Service Interface
// ============================================================================

/// Retrieval Service Interface
///
/// Semantic search over the chunk index with a relevance threshold.
#[async_trait]
pub trait RetrievalServiceInterface: Send + Sync {
    /// Up to `k` chunks scoring at least `threshold`, in ranking order
    async fn retrieve(&self, query: &Query, k: usize, threshold: f32) -> Result<RetrievalResult>;
}

// ============================================================================
// Answer Service Interface
// ============================================================================

/// Answer Service Interface
///
/// One question in, one answer out. No dialogue state is kept between calls.
#[async_trait]
pub trait AnswerServiceInterface: Send + Sync {
    /// Validate, detect, retrieve and assemble the prompt without calling the backend
    async fn prepare(&self, raw: &str) -> Result<Prompt>;

    /// Answer a raw user question
    async fn answer(&self, raw: &str) -> Result<Answer>;

    /// Answer text for the chat surface; failures become an apology
    async fn respond(&self, raw: &str) -> String;
}
