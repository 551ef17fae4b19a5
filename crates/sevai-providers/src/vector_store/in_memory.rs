//! In-memory vector store provider implementation
//!
//! Provides an in-memory chunk index for development and testing.
//! Data is not persisted and will be lost on restart; the filesystem store
//! wraps this one and snapshots collections to disk.

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sevai_domain::entities::Chunk;
use sevai_domain::error::{Error, Result};
use sevai_domain::ports::providers::{IndexedChunk, VectorStoreAdmin, VectorStoreProvider};
use sevai_domain::value_objects::{Language, ScoredChunk, cosine_similarity, rank};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Entries of one collection, keyed and ordered by chunk id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionData {
    /// Dimensionality every embedding in the collection must have
    pub dimensions: usize,
    /// Indexed chunks by id
    pub entries: BTreeMap<String, IndexedChunk>,
}

impl CollectionData {
    fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            entries: BTreeMap::new(),
        }
    }

    fn language_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.entries.values() {
            *counts.entry(entry.chunk.language().tag()).or_insert(0) += 1;
        }
        counts
    }
}

fn collection_not_found(name: &str) -> Error {
    Error::vector_db(format!("Collection '{name}' not found"))
}

/// In-memory vector store provider
///
/// Stores chunks and embeddings in memory using a concurrent hash map of
/// collections. A batch upsert holds the collection's write guard for the
/// whole batch, so readers never observe a partially applied batch.
#[derive(Clone)]
pub struct InMemoryVectorStoreProvider {
    collections: Arc<DashMap<String, CollectionData>>,
}

impl InMemoryVectorStoreProvider {
    /// Create a new in-memory vector store provider
    pub fn new() -> Self {
        Self {
            collections: Arc::new(DashMap::new()),
        }
    }

    /// Copy of a collection's data
    pub fn snapshot(&self, name: &str) -> Option<CollectionData> {
        self.collections.get(name).map(|data| data.clone())
    }

    /// Replace a collection's data wholesale
    pub fn restore(&self, name: &str, data: CollectionData) {
        self.collections.insert(name.to_string(), data);
    }

    /// Names of all collections
    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl Default for InMemoryVectorStoreProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStoreAdmin for InMemoryVectorStoreProvider {
    async fn collection_exists(&self, name: &str) -> Result<bool> {
        Ok(self.collections.contains_key(name))
    }

    async fn get_stats(&self, collection: &str) -> Result<HashMap<String, Value>> {
        let mut stats = HashMap::new();
        stats.insert("collection".to_string(), serde_json::json!(collection));
        stats.insert(
            "provider".to_string(),
            serde_json::json!(self.provider_name()),
        );

        match self.collections.get(collection) {
            Some(data) => {
                stats.insert("status".to_string(), serde_json::json!("active"));
                stats.insert("total_count".to_string(), serde_json::json!(data.entries.len()));
                stats.insert("dimensions".to_string(), serde_json::json!(data.dimensions));
                stats.insert(
                    "languages".to_string(),
                    serde_json::json!(data.language_counts()),
                );
            }
            None => {
                stats.insert("status".to_string(), serde_json::json!("missing"));
                stats.insert("total_count".to_string(), serde_json::json!(0));
                stats.insert("dimensions".to_string(), serde_json::json!(0));
            }
        }
        Ok(stats)
    }

    async fn flush(&self, _collection: &str) -> Result<()> {
        // No-op for in-memory store
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

#[async_trait]
impl VectorStoreProvider for InMemoryVectorStoreProvider {
    async fn create_collection(&self, name: &str, dimensions: usize) -> Result<()> {
        if dimensions == 0 {
            return Err(Error::invalid_argument(
                "collection dimensions must be greater than zero",
            ));
        }
        if let Some(existing) = self.collections.get(name) {
            if existing.dimensions != dimensions {
                return Err(Error::vector_db(format!(
                    "Collection '{name}' already exists with {} dimensions, requested {dimensions}",
                    existing.dimensions
                )));
            }
            return Ok(());
        }
        self.collections
            .entry(name.to_string())
            .or_insert_with(|| CollectionData::new(dimensions));
        Ok(())
    }

    async fn delete_collection(&self, name: &str) -> Result<()> {
        self.collections.remove(name);
        Ok(())
    }

    async fn upsert(&self, collection: &str, entries: &[IndexedChunk]) -> Result<usize> {
        let mut data = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| collection_not_found(collection))?;

        if let Some(bad) = entries
            .iter()
            .find(|e| e.embedding.vector.len() != data.dimensions)
        {
            return Err(Error::vector_db(format!(
                "Embedding for chunk '{}' has {} dimensions, collection '{collection}' expects {}",
                bad.chunk.id,
                bad.embedding.vector.len(),
                data.dimensions
            )));
        }

        for entry in entries {
            data.entries.insert(entry.chunk.id.clone(), entry.clone());
        }
        Ok(entries.len())
    }

    async fn search_similar(
        &self,
        collection: &str,
        query_vector: &[f32],
        limit: usize,
        language: Option<Language>,
    ) -> Result<Vec<ScoredChunk>> {
        // Return empty results for non-existent collections (graceful degradation)
        let Some(data) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };
        if limit == 0 || data.entries.is_empty() {
            return Ok(Vec::new());
        }
        if query_vector.len() != data.dimensions {
            return Err(Error::vector_db(format!(
                "Query has {} dimensions, collection '{collection}' expects {}",
                query_vector.len(),
                data.dimensions
            )));
        }

        let mut hits: Vec<ScoredChunk> = data
            .entries
            .values()
            .filter(|e| language.is_none_or(|l| e.chunk.language() == l))
            .map(|e| {
                ScoredChunk::new(
                    e.chunk.clone(),
                    cosine_similarity(query_vector, &e.embedding.vector),
                )
            })
            .collect();
        rank(&mut hits);
        hits.truncate(limit);
        Ok(hits)
    }

    async fn get_digests(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<HashMap<String, String>> {
        let Some(data) = self.collections.get(collection) else {
            return Ok(HashMap::new());
        };
        Ok(ids
            .iter()
            .filter_map(|id| {
                data.entries
                    .get(id)
                    .map(|e| (id.clone(), e.digest.clone()))
            })
            .collect())
    }

    async fn get_by_ids(&self, collection: &str, ids: &[String]) -> Result<Vec<IndexedChunk>> {
        let data = self
            .collections
            .get(collection)
            .ok_or_else(|| collection_not_found(collection))?;
        Ok(ids
            .iter()
            .filter_map(|id| data.entries.get(id).cloned())
            .collect())
    }

    async fn list_chunks(&self, collection: &str, limit: usize) -> Result<Vec<Chunk>> {
        let data = self
            .collections
            .get(collection)
            .ok_or_else(|| collection_not_found(collection))?;
        Ok(data
            .entries
            .values()
            .take(limit)
            .map(|e| e.chunk.clone())
            .collect())
    }

    async fn count(&self, collection: &str) -> Result<usize> {
        Ok(self
            .collections
            .get(collection)
            .map_or(0, |data| data.entries.len()))
    }
}
