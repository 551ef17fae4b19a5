//! Filesystem vector store provider
//!
//! Keeps collections in memory and snapshots each one to
//! `{base_path}/{collection}.json` on `flush`. Snapshots are written to a
//! temporary file and renamed into place, so a reader of the directory
//! never observes a partially written collection. Existing snapshots are
//! loaded when the store is opened.

use async_trait::async_trait;
use serde_json::Value;
use sevai_domain::entities::Chunk;
use sevai_domain::error::{Error, Result};
use sevai_domain::ports::providers::{IndexedChunk, VectorStoreAdmin, VectorStoreProvider};
use sevai_domain::value_objects::{Language, ScoredChunk};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::in_memory::{CollectionData, InMemoryVectorStoreProvider};
use crate::constants::{SNAPSHOT_FILE_EXTENSION, SNAPSHOT_TEMP_EXTENSION};

// File utility helpers
mod file_utils {
    use serde::{Serialize, de::DeserializeOwned};
    use sevai_domain::error::{Error, Result};
    use std::path::Path;

    pub async fn exists(path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    pub async fn read_json<T: DeserializeOwned>(path: &Path, description: &str) -> Result<T> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to read {description}"), e))?;
        serde_json::from_str(&content).map_err(|e| {
            Error::vector_db(format!("Failed to parse {description}: {e}"))
        })
    }

    /// Serialize to `tmp`, then rename over `path`
    pub async fn write_json_atomic<T: Serialize>(
        path: &Path,
        tmp: &Path,
        data: &T,
        description: &str,
    ) -> Result<()> {
        let content = serde_json::to_vec_pretty(data)?;
        tokio::fs::write(tmp, content)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to write {description}"), e))?;
        tokio::fs::rename(tmp, path)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to replace {description}"), e))
    }
}

/// Collection names become file names, so only a safe alphabet is accepted
fn validate_collection_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "Invalid collection name '{name}': use letters, digits, '_' or '-'"
        )))
    }
}

/// Filesystem-backed vector store provider
pub struct FilesystemVectorStoreProvider {
    base_path: PathBuf,
    inner: InMemoryVectorStoreProvider,
}

impl FilesystemVectorStoreProvider {
    /// Open the store at `base_path`, creating the directory if needed and
    /// loading every collection snapshot found there
    pub async fn open(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        tokio::fs::create_dir_all(&base_path).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to create vector store directory {}", base_path.display()),
                e,
            )
        })?;

        let store = Self {
            base_path,
            inner: InMemoryVectorStoreProvider::new(),
        };
        store.load_all().await?;
        Ok(store)
    }

    /// Directory holding the snapshots
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn snapshot_path(&self, collection: &str) -> PathBuf {
        self.base_path
            .join(format!("{collection}.{SNAPSHOT_FILE_EXTENSION}"))
    }

    fn temp_path(&self, collection: &str) -> PathBuf {
        self.base_path
            .join(format!("{collection}.{SNAPSHOT_TEMP_EXTENSION}"))
    }

    async fn load_all(&self) -> Result<()> {
        let mut entries = tokio::fs::read_dir(&self.base_path).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to list {}", self.base_path.display()),
                e,
            )
        })?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SNAPSHOT_FILE_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if validate_collection_name(name).is_err() {
                debug!(path = %path.display(), "Ignoring file with invalid collection name");
                continue;
            }
            let data: CollectionData =
                file_utils::read_json(&path, &format!("collection snapshot {name}")).await?;
            info!(
                collection = name,
                chunks = data.entries.len(),
                "Loaded collection snapshot"
            );
            self.inner.restore(name, data);
        }
        Ok(())
    }

    async fn persist(&self, collection: &str) -> Result<()> {
        let Some(data) = self.inner.snapshot(collection) else {
            return Ok(());
        };
        file_utils::write_json_atomic(
            &self.snapshot_path(collection),
            &self.temp_path(collection),
            &data,
            &format!("collection snapshot {collection}"),
        )
        .await?;
        debug!(collection, chunks = data.entries.len(), "Persisted collection snapshot");
        Ok(())
    }
}

#[async_trait]
impl VectorStoreAdmin for FilesystemVectorStoreProvider {
    async fn collection_exists(&self, name: &str) -> Result<bool> {
        self.inner.collection_exists(name).await
    }

    async fn get_stats(&self, collection: &str) -> Result<HashMap<String, Value>> {
        let mut stats = self.inner.get_stats(collection).await?;
        stats.insert(
            "provider".to_string(),
            serde_json::json!(self.provider_name()),
        );
        stats.insert(
            "path".to_string(),
            serde_json::json!(self.snapshot_path(collection).display().to_string()),
        );
        Ok(stats)
    }

    async fn flush(&self, collection: &str) -> Result<()> {
        validate_collection_name(collection)?;
        self.persist(collection).await
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

#[async_trait]
impl VectorStoreProvider for FilesystemVectorStoreProvider {
    async fn create_collection(&self, name: &str, dimensions: usize) -> Result<()> {
        validate_collection_name(name)?;
        self.inner.create_collection(name, dimensions).await?;
        self.persist(name).await
    }

    async fn delete_collection(&self, name: &str) -> Result<()> {
        validate_collection_name(name)?;
        self.inner.delete_collection(name).await?;
        let path = self.snapshot_path(name);
        if file_utils::exists(&path).await {
            tokio::fs::remove_file(&path).await.map_err(|e| {
                Error::io_with_source(format!("Failed to remove {}", path.display()), e)
            })?;
        }
        Ok(())
    }

    /// Written to disk on the next `flush`
    async fn upsert(&self, collection: &str, entries: &[IndexedChunk]) -> Result<usize> {
        self.inner.upsert(collection, entries).await
    }

    async fn search_similar(
        &self,
        collection: &str,
        query_vector: &[f32],
        limit: usize,
        language: Option<Language>,
    ) -> Result<Vec<ScoredChunk>> {
        self.inner
            .search_similar(collection, query_vector, limit, language)
            .await
    }

    async fn get_digests(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<HashMap<String, String>> {
        self.inner.get_digests(collection, ids).await
    }

    async fn get_by_ids(&self, collection: &str, ids: &[String]) -> Result<Vec<IndexedChunk>> {
        self.inner.get_by_ids(collection, ids).await
    }

    async fn list_chunks(&self, collection: &str, limit: usize) -> Result<Vec<Chunk>> {
        self.inner.list_chunks(collection, limit).await
    }

    async fn count(&self, collection: &str) -> Result<usize> {
        self.inner.count(collection).await
    }
}
