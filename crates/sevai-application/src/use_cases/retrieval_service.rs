//! Retrieval Service Use Case
//!
//! Embeds the query and searches the chunk index. Tamil queries search
//! Tamil chunks first and fall back to the whole corpus when nothing in
//! Tamil clears the threshold.

use crate::ports::services::RetrievalServiceInterface;
use crate::resilience::{RetryPolicy, ServiceKind, call_with_retry};
use sevai_domain::error::Result;
use sevai_domain::ports::providers::{EmbeddingProvider, VectorStoreProvider};
use sevai_domain::value_objects::{Language, Query, RetrievalResult, ScoredChunk, rank};
use std::sync::Arc;
use tracing::debug;

/// Retrieval service implementation
pub struct RetrievalServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store_provider: Arc<dyn VectorStoreProvider>,
    collection: String,
    retry: RetryPolicy,
}

impl RetrievalServiceImpl {
    /// Create new retrieval service over `collection`
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store_provider: Arc<dyn VectorStoreProvider>,
        collection: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            embedding_provider,
            vector_store_provider,
            collection: collection.into(),
            retry,
        }
    }

    /// Search, keep hits at or above the threshold, in ranking order
    async fn search(
        &self,
        vector: &[f32],
        k: usize,
        threshold: f32,
        language: Option<Language>,
    ) -> Result<Vec<ScoredChunk>> {
        let mut hits = self
            .vector_store_provider
            .search_similar(&self.collection, vector, k, language)
            .await?;
        hits.retain(|h| h.score >= threshold);
        rank(&mut hits);
        hits.truncate(k);
        Ok(hits)
    }
}

#[async_trait::async_trait]
impl RetrievalServiceInterface for RetrievalServiceImpl {
    async fn retrieve(&self, query: &Query, k: usize, threshold: f32) -> Result<RetrievalResult> {
        if k == 0 {
            return Ok(RetrievalResult::empty());
        }
        if self.vector_store_provider.count(&self.collection).await? == 0 {
            debug!(collection = %self.collection, "Index is empty, nothing to retrieve");
            return Ok(RetrievalResult::empty());
        }

        let provider = &self.embedding_provider;
        let text = query.text.as_str();
        let embedding = call_with_retry(&self.retry, ServiceKind::Embedding, "embed query", || {
            provider.embed(text)
        })
        .await?;

        if query.language == Language::Tamil {
            let hits = self
                .search(&embedding.vector, k, threshold, Some(Language::Tamil))
                .await?;
            if !hits.is_empty() {
                return Ok(RetrievalResult {
                    hits,
                    language_fallback: false,
                });
            }
            debug!("No Tamil chunk cleared the threshold, searching whole corpus");
            let hits = self.search(&embedding.vector, k, threshold, None).await?;
            return Ok(RetrievalResult {
                hits,
                language_fallback: true,
            });
        }

        let hits = self.search(&embedding.vector, k, threshold, None).await?;
        debug!(hits = hits.len(), "Retrieved chunks");
        Ok(RetrievalResult {
            hits,
            language_fallback: false,
        })
    }
}
