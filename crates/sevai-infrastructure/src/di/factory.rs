//! Provider Factory
//!
//! Factories for creating embedding, completion and vector store providers
//! from configuration.
//!
//! **All provider implementations come from the sevai-providers crate.**
//! This module only handles wiring.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sevai_domain::error::{Error, Result};
use sevai_domain::ports::providers::{CompletionProvider, EmbeddingProvider, VectorStoreProvider};
use sevai_providers::completion::{Attribution, OpenAICompletionProvider};
use sevai_providers::constants::{EMBEDDING_DEFAULT_OPENAI_MODEL, OPENROUTER_BASE_URL};
use sevai_providers::embedding::{HashingEmbeddingProvider, OpenAIEmbeddingProvider};
use sevai_providers::vector_store::{FilesystemVectorStoreProvider, InMemoryVectorStoreProvider};

use crate::config::{
    ApiKey, CompletionConfig, EmbeddingConfig, ProvidersConfig, VectorStoreConfig,
};

/// Known embedding provider names
pub mod embedding_providers {
    pub const HASHING: &str = "hashing";
    pub const OPENAI: &str = "openai";
}

/// Known completion provider names
pub mod completion_providers {
    pub const OPENROUTER: &str = "openrouter";
    pub const OPENAI: &str = "openai";
}

/// Known vector store provider names
pub mod vector_store_providers {
    pub const IN_MEMORY: &str = "in_memory";
    pub const MEMORY: &str = "memory";
    pub const FILESYSTEM: &str = "filesystem";
}

fn require_api_key(key: Option<&ApiKey>, provider: &str) -> Result<String> {
    key.filter(|k| !k.is_blank())
        .map(|k| k.expose().to_string())
        .ok_or_else(|| {
            Error::configuration(format!(
                "API key required for {provider} provider (set providers.api_key or OPENAI_API_KEY)"
            ))
        })
}

/// Factory for creating embedding providers
pub struct EmbeddingProviderFactory;

impl EmbeddingProviderFactory {
    /// Create an embedding provider based on configuration
    pub fn create(
        config: &EmbeddingConfig,
        api_key: Option<&ApiKey>,
        http_client: &Client,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        match config.provider.to_lowercase().as_str() {
            embedding_providers::HASHING => {
                let provider = match config.dimensions {
                    Some(dimensions) => HashingEmbeddingProvider::with_dimensions(dimensions)?,
                    None => HashingEmbeddingProvider::new(),
                };
                Ok(Arc::new(provider))
            }
            embedding_providers::OPENAI => Ok(Arc::new(OpenAIEmbeddingProvider::new(
                require_api_key(api_key, "OpenAI embedding")?,
                config.base_url.clone(),
                config
                    .model
                    .clone()
                    .unwrap_or_else(|| EMBEDDING_DEFAULT_OPENAI_MODEL.to_string()),
                Duration::from_millis(config.timeout_ms),
                http_client.clone(),
            ))),
            _ => Err(Error::configuration(format!(
                "Unknown embedding provider: {}",
                config.provider
            ))),
        }
    }
}

/// Factory for creating completion providers
pub struct CompletionProviderFactory;

impl CompletionProviderFactory {
    /// Create a completion provider based on configuration
    ///
    /// `openrouter` and `openai` share the OpenAI-compatible client; they
    /// differ only in the default base URL.
    pub fn create(
        config: &CompletionConfig,
        api_key: Option<&ApiKey>,
        http_client: &Client,
    ) -> Result<Arc<dyn CompletionProvider>> {
        let base_url = match config.provider.to_lowercase().as_str() {
            completion_providers::OPENROUTER => config
                .base_url
                .clone()
                .or_else(|| Some(OPENROUTER_BASE_URL.to_string())),
            completion_providers::OPENAI => config.base_url.clone(),
            _ => {
                return Err(Error::configuration(format!(
                    "Unknown completion provider: {}",
                    config.provider
                )));
            }
        };

        Ok(Arc::new(OpenAICompletionProvider::new(
            require_api_key(api_key, "completion")?,
            base_url,
            Some(config.model.clone()),
            Attribution {
                referer: config.referer.clone(),
                title: config.title.clone(),
            },
            Duration::from_millis(config.timeout_ms),
            http_client.clone(),
        )))
    }
}

/// Factory for creating vector store providers
pub struct VectorStoreProviderFactory;

impl VectorStoreProviderFactory {
    /// Create a vector store provider based on configuration
    ///
    /// The filesystem store loads existing snapshots, hence async.
    pub async fn create(config: &VectorStoreConfig) -> Result<Arc<dyn VectorStoreProvider>> {
        match config.provider.to_lowercase().as_str() {
            vector_store_providers::IN_MEMORY | vector_store_providers::MEMORY => {
                Ok(Arc::new(InMemoryVectorStoreProvider::new()))
            }
            vector_store_providers::FILESYSTEM => Ok(Arc::new(
                FilesystemVectorStoreProvider::open(config.path.clone()).await?,
            )),
            _ => Err(Error::configuration(format!(
                "Unknown vector store provider: {}",
                config.provider
            ))),
        }
    }
}

/// Shared HTTP client sized for the slowest configured provider
pub fn http_client(config: &ProvidersConfig) -> Result<Client> {
    let timeout_ms = config.embedding.timeout_ms.max(config.completion.timeout_ms);
    sevai_providers::http::HttpClientConfig::with_timeout(Duration::from_millis(timeout_ms))
        .build_client()
}
