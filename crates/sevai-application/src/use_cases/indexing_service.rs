//! Indexing Service Use Case
//!
//! Application service for corpus ingestion. Normalizes records, skips
//! chunks whose text is already indexed, embeds the rest in batches and
//! upserts them keyed by chunk id.

use crate::domain_services::DocumentNormalizer;
use crate::ports::services::{IndexingResult, IndexingServiceInterface};
use crate::resilience::{RetryPolicy, ServiceKind, call_with_retry};
use serde_json::Value;
use sevai_domain::constants::INDEXING_BATCH_SIZE;
use sevai_domain::entities::{Chunk, RawRecord};
use sevai_domain::error::{Error, Result};
use sevai_domain::ports::providers::{EmbeddingProvider, IndexedChunk, VectorStoreProvider};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Collapse duplicate ids, keeping the first position and the last content
fn dedup_chunks(chunks: Vec<Chunk>, result: &mut IndexingResult) -> Vec<Chunk> {
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(chunks.len());
    let mut unique: Vec<Chunk> = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        if let Some(&pos) = positions.get(&chunk.id) {
            warn!(chunk_id = %chunk.id, "Duplicate chunk id in batch, keeping last occurrence");
            result
                .errors
                .push(format!("duplicate chunk id {}", chunk.id));
            result.duplicates += 1;
            unique[pos] = chunk;
        } else {
            positions.insert(chunk.id.clone(), unique.len());
            unique.push(chunk);
        }
    }
    unique
}

/// Indexing service implementation
pub struct IndexingServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store_provider: Arc<dyn VectorStoreProvider>,
    normalizer: DocumentNormalizer,
    retry: RetryPolicy,
    batch_size: usize,
}

impl IndexingServiceImpl {
    /// Create new indexing service with injected dependencies
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store_provider: Arc<dyn VectorStoreProvider>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            embedding_provider,
            vector_store_provider,
            normalizer: DocumentNormalizer::new(),
            retry,
            batch_size: INDEXING_BATCH_SIZE,
        }
    }

    /// Override the embedding batch size (minimum 1)
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Create the collection if it does not exist yet
    async fn ensure_collection(&self, collection: &str) -> Result<()> {
        if !self
            .vector_store_provider
            .collection_exists(collection)
            .await?
        {
            let dimensions = self.embedding_provider.dimensions();
            info!(collection, dimensions, "Creating collection");
            self.vector_store_provider
                .create_collection(collection, dimensions)
                .await?;
        }
        Ok(())
    }

    /// Chunks whose id is absent or whose stored digest differs
    async fn pending_chunks(&self, collection: &str, chunks: Vec<Chunk>) -> Result<Vec<Chunk>> {
        let ids: Vec<String> = chunks.iter().map(|c| c.id.clone()).collect();
        let digests = self
            .vector_store_provider
            .get_digests(collection, &ids)
            .await?;
        Ok(chunks
            .into_iter()
            .filter(|c| digests.get(&c.id) != Some(&c.text_digest()))
            .collect())
    }

    /// Embed and upsert one batch
    async fn index_batch(&self, collection: &str, batch: &[Chunk]) -> Result<usize> {
        let texts: Vec<String> = batch.iter().map(|c| c.text.clone()).collect();
        let provider = &self.embedding_provider;
        let embeddings = call_with_retry(&self.retry, ServiceKind::Embedding, "embed batch", || {
            provider.embed_batch(&texts)
        })
        .await?;

        if embeddings.len() != batch.len() {
            return Err(Error::embedding_unavailable(format!(
                "expected {} embeddings, got {}",
                batch.len(),
                embeddings.len()
            )));
        }

        let entries: Vec<IndexedChunk> = batch
            .iter()
            .cloned()
            .zip(embeddings)
            .map(|(chunk, embedding)| IndexedChunk::new(chunk, embedding))
            .collect();
        self.vector_store_provider.upsert(collection, &entries).await
    }
}

#[async_trait::async_trait]
impl IndexingServiceInterface for IndexingServiceImpl {
    async fn index_chunks(&self, collection: &str, chunks: Vec<Chunk>) -> Result<IndexingResult> {
        let mut result = IndexingResult {
            chunks_received: chunks.len(),
            ..IndexingResult::default()
        };
        self.ensure_collection(collection).await?;

        let unique = dedup_chunks(chunks, &mut result);
        let unique_count = unique.len();
        let pending = self.pending_chunks(collection, unique).await?;
        result.chunks_unchanged = unique_count - pending.len();

        for batch in pending.chunks(self.batch_size) {
            match self.index_batch(collection, batch).await {
                Ok(written) => {
                    result.chunks_indexed += written;
                    debug!(collection, written, "Indexed batch");
                }
                Err(e) => {
                    warn!(
                        collection,
                        indexed = result.chunks_indexed,
                        remaining = pending.len() - result.chunks_indexed,
                        error = %e,
                        "Indexing interrupted, keeping completed batches"
                    );
                    if result.chunks_indexed > 0 {
                        self.vector_store_provider.flush(collection).await?;
                    }
                    return Err(e);
                }
            }
        }

        if result.chunks_indexed > 0 {
            self.vector_store_provider.flush(collection).await?;
        }
        info!(
            collection,
            indexed = result.chunks_indexed,
            unchanged = result.chunks_unchanged,
            duplicates = result.duplicates,
            "Indexing complete"
        );
        Ok(result)
    }

    async fn ingest_records(
        &self,
        collection: &str,
        records: &[RawRecord],
    ) -> Result<IndexingResult> {
        let report = self.normalizer.normalize_batch(records);
        let mut errors: Vec<String> = report.skipped.iter().map(ToString::to_string).collect();
        let records_seen = report.records_seen;
        let records_skipped = report.skipped.len();

        let mut result = self.index_chunks(collection, report.chunks).await?;
        result.records_seen = records_seen;
        result.records_skipped = records_skipped;
        errors.append(&mut result.errors);
        result.errors = errors;
        Ok(result)
    }

    async fn clear_collection(&self, collection: &str) -> Result<()> {
        if self
            .vector_store_provider
            .collection_exists(collection)
            .await?
        {
            info!(collection, "Clearing collection");
            self.vector_store_provider
                .delete_collection(collection)
                .await?;
        }
        Ok(())
    }

    async fn collection_stats(&self, collection: &str) -> Result<HashMap<String, Value>> {
        self.vector_store_provider.get_stats(collection).await
    }
}
