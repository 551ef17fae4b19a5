use crate::entities::Chunk;
use crate::error::Result;
use crate::value_objects::{Embedding, Language, ScoredChunk};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A chunk together with its current embedding
///
/// `digest` is the SHA-256 of the embedded text; the indexer compares it to
/// skip chunks whose text did not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedChunk {
    /// The indexed chunk
    pub chunk: Chunk,
    /// Embedding of `chunk.text`
    pub embedding: Embedding,
    /// Digest of the embedded text
    pub digest: String,
}

impl IndexedChunk {
    /// Pair a chunk with its embedding, computing the text digest
    pub fn new(chunk: Chunk, embedding: Embedding) -> Self {
        let digest = chunk.text_digest();
        Self {
            chunk,
            embedding,
            digest,
        }
    }
}

/// Vector Store Administrative Operations
///
/// Defines administrative and monitoring operations for vector stores.
///
/// # Example
///
/// ```ignore
/// use sevai_domain::ports::providers::VectorStoreAdmin;
///
/// if provider.collection_exists("schemes").await? {
///     let stats = provider.get_stats("schemes").await?;
///     println!("Collection has {} chunks", stats["total_count"]);
///     provider.flush("schemes").await?;
/// }
/// ```
#[async_trait]
pub trait VectorStoreAdmin: Send + Sync {
    /// Check if a collection exists
    async fn collection_exists(&self, name: &str) -> Result<bool>;

    /// Get statistics about a collection
    ///
    /// # Returns
    /// Ok(hashmap) with at least `collection`, `total_count` and `dimensions`
    async fn get_stats(&self, collection: &str) -> Result<HashMap<String, Value>>;

    /// Flush pending writes for a collection
    async fn flush(&self, collection: &str) -> Result<()>;

    /// Get the name/identifier of this vector store provider
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation)
    async fn health_check(&self) -> Result<()> {
        self.collection_exists("__health_check__").await?;
        Ok(())
    }
}

/// Chunk Index Interface
///
/// Stores (chunk, embedding) pairs per named collection, keyed by chunk id,
/// and answers cosine-similarity queries over them.
///
/// ## Contract
///
/// - one current entry per chunk id; upserting an existing id replaces it
/// - a batch upsert is applied atomically with respect to readers
/// - search results are in ranking order: descending score, ascending id
///
/// # Example
///
/// ```ignore
/// use sevai_domain::ports::providers::VectorStoreProvider;
///
/// provider.create_collection("schemes", 384).await?;
/// provider.upsert("schemes", &entries).await?;
/// let hits = provider
///     .search_similar("schemes", &query.vector, 3, Some(Language::Tamil))
///     .await?;
/// ```
#[async_trait]
pub trait VectorStoreProvider: VectorStoreAdmin + Send + Sync {
    /// Create a collection for vectors of the given dimensions
    ///
    /// Creating an existing collection is a no-op.
    async fn create_collection(&self, name: &str, dimensions: usize) -> Result<()>;

    /// Delete a collection and everything in it
    async fn delete_collection(&self, name: &str) -> Result<()>;

    /// Insert or replace entries, keyed by chunk id
    ///
    /// # Returns
    /// Ok(count) of entries written
    async fn upsert(&self, collection: &str, entries: &[IndexedChunk]) -> Result<usize>;

    /// Search for chunks similar to a query vector
    ///
    /// # Arguments
    /// * `collection` - Name of the collection to search in
    /// * `query_vector` - The query embedding
    /// * `limit` - Maximum number of results to return
    /// * `language` - Restrict the search to chunks tagged with this language
    ///
    /// # Returns
    /// Ok(results) in ranking order; a missing collection yields no results
    async fn search_similar(
        &self,
        collection: &str,
        query_vector: &[f32],
        limit: usize,
        language: Option<Language>,
    ) -> Result<Vec<ScoredChunk>>;

    /// Text digests of the requested ids that are present
    async fn get_digests(&self, collection: &str, ids: &[String])
    -> Result<HashMap<String, String>>;

    /// Retrieve entries by id, skipping unknown ids
    async fn get_by_ids(&self, collection: &str, ids: &[String]) -> Result<Vec<IndexedChunk>>;

    /// List chunks in id order
    async fn list_chunks(&self, collection: &str, limit: usize) -> Result<Vec<Chunk>>;

    /// Number of entries in a collection, zero when it does not exist
    async fn count(&self, collection: &str) -> Result<usize>;
}
