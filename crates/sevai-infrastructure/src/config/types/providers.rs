//! Provider configuration types

use crate::constants::{
    COMPLETION_TIMEOUT_MS, DEFAULT_COMPLETION_PROVIDER, DEFAULT_EMBEDDING_PROVIDER,
    DEFAULT_INDEX_DIR, DEFAULT_VECTOR_STORE_PROVIDER, EMBEDDING_TIMEOUT_MS,
};
use serde::{Deserialize, Serialize};
use sevai_domain::constants::DEFAULT_COLLECTION;
use sevai_providers::constants::{
    COMPLETION_DEFAULT_MODEL, OPENROUTER_DEFAULT_REFERER, OPENROUTER_DEFAULT_TITLE,
};
use std::fmt;
use std::path::PathBuf;

/// API credential; never printed by `Debug`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key itself
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the key is blank
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Embedding provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider name: `hashing` or `openai`
    pub provider: String,
    /// Model name (remote providers)
    pub model: Option<String>,
    /// Base URL of an OpenAI-compatible API
    pub base_url: Option<String>,
    /// Provider-specific key; falls back to `providers.api_key`
    pub api_key: Option<ApiKey>,
    /// Vector dimensions (hashing provider)
    pub dimensions: Option<usize>,
    /// Timeout of one embedding request in milliseconds
    pub timeout_ms: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: None,
            base_url: None,
            api_key: None,
            dimensions: None,
            timeout_ms: EMBEDDING_TIMEOUT_MS,
        }
    }
}

/// Completion provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Provider name: `openrouter` or `openai`
    pub provider: String,
    /// Model name
    pub model: String,
    /// Base URL of an OpenAI-compatible API
    pub base_url: Option<String>,
    /// Provider-specific key; falls back to `providers.api_key`
    pub api_key: Option<ApiKey>,
    /// `HTTP-Referer` attribution header
    pub referer: String,
    /// `X-Title` attribution header
    pub title: String,
    /// Timeout of one completion request in milliseconds
    pub timeout_ms: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_COMPLETION_PROVIDER.to_string(),
            model: COMPLETION_DEFAULT_MODEL.to_string(),
            base_url: None,
            api_key: None,
            referer: OPENROUTER_DEFAULT_REFERER.to_string(),
            title: OPENROUTER_DEFAULT_TITLE.to_string(),
            timeout_ms: COMPLETION_TIMEOUT_MS,
        }
    }
}

/// Vector store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreConfig {
    /// Provider name: `filesystem` or `in_memory`
    pub provider: String,
    /// Snapshot directory (filesystem provider)
    pub path: PathBuf,
    /// Collection holding the corpus
    pub collection: String,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_VECTOR_STORE_PROVIDER.to_string(),
            path: PathBuf::from(DEFAULT_INDEX_DIR),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

/// Provider configurations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Shared API key for remote providers
    pub api_key: Option<ApiKey>,
    /// Embedding provider configuration
    pub embedding: EmbeddingConfig,
    /// Completion provider configuration
    pub completion: CompletionConfig,
    /// Vector store configuration
    pub vector_store: VectorStoreConfig,
}

impl ProvidersConfig {
    /// Key for the embedding provider
    pub fn embedding_api_key(&self) -> Option<&ApiKey> {
        self.embedding.api_key.as_ref().or(self.api_key.as_ref())
    }

    /// Key for the completion provider
    pub fn completion_api_key(&self) -> Option<&ApiKey> {
        self.completion.api_key.as_ref().or(self.api_key.as_ref())
    }
}
