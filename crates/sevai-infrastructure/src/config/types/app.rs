//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::ingestion::{IngestionConfig, SourceConfig};
pub use super::logging::LoggingConfig;
pub use super::pipeline::{GenerationConfig, PromptConfig, ResilienceConfig, RetrievalConfig};
pub use super::providers::{
    ApiKey, CompletionConfig, EmbeddingConfig, ProvidersConfig, VectorStoreConfig,
};

/// Main application configuration
///
/// Created once at startup and passed explicitly to the factories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Provider configurations
    pub providers: ProvidersConfig,
    /// Retrieval configuration
    pub retrieval: RetrievalConfig,
    /// Prompt configuration
    pub prompt: PromptConfig,
    /// Generation parameters
    pub generation: GenerationConfig,
    /// Retry settings
    pub resilience: ResilienceConfig,
    /// Corpus sources
    pub ingestion: IngestionConfig,
}
