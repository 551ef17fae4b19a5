//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::{ApiKey, AppConfig, LoggingConfig, SourceConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    OPENAI_API_KEY_ENV,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use sevai_application::domain_services::PromptAssembler;
use sevai_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first one discovered)
    /// 3. Environment variables with prefix (e.g., `SEVAI__RETRIEVAL__TOP_K`)
    /// 4. `OPENAI_API_KEY`, when no API key was configured otherwise
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(config_path) if config_path.exists() => {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            }
            Some(config_path) => {
                log_config_loaded(config_path, false);
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            None => {
                if let Some(default_path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let mut app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        if app_config.providers.api_key.is_none() {
            app_config.providers.api_key = env::var(OPENAI_API_KEY_ENV)
                .ok()
                .map(ApiKey::new)
                .filter(|key| !key.is_blank());
        }

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(&config.logging)?;
    validate_retrieval_config(config)?;
    validate_prompt_config(config)?;
    validate_generation_config(config)?;
    validate_provider_config(config)?;
    validate_sources(&config.ingestion.sources)?;
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

fn validate_retrieval_config(config: &AppConfig) -> Result<()> {
    if config.retrieval.top_k == 0 {
        return Err(Error::configuration("retrieval.top_k cannot be 0"));
    }
    let threshold = config.retrieval.relevance_threshold;
    if !(-1.0..=1.0).contains(&threshold) {
        return Err(Error::configuration(format!(
            "retrieval.relevance_threshold must be within [-1, 1], got {threshold}"
        )));
    }
    Ok(())
}

fn validate_prompt_config(config: &AppConfig) -> Result<()> {
    if config.prompt.max_query_chars == 0 {
        return Err(Error::configuration("prompt.max_query_chars cannot be 0"));
    }
    let required = config.prompt.max_query_chars + PromptAssembler::bare_overhead_chars();
    if config.prompt.budget_chars < required {
        return Err(Error::configuration(format!(
            "prompt.budget_chars ({}) must be at least {required}: prompt.max_query_chars ({}) \
             plus the instruction",
            config.prompt.budget_chars, config.prompt.max_query_chars
        )));
    }
    Ok(())
}

fn validate_generation_config(config: &AppConfig) -> Result<()> {
    if config.generation.max_tokens == 0 {
        return Err(Error::configuration("generation.max_tokens cannot be 0"));
    }
    if !(0.0..=2.0).contains(&config.generation.temperature) {
        return Err(Error::configuration(format!(
            "generation.temperature must be within [0, 2], got {}",
            config.generation.temperature
        )));
    }
    Ok(())
}

fn validate_provider_config(config: &AppConfig) -> Result<()> {
    let providers = &config.providers;
    if providers.embedding.timeout_ms == 0 || providers.completion.timeout_ms == 0 {
        return Err(Error::configuration("provider timeouts cannot be 0"));
    }
    if providers.embedding.dimensions == Some(0) {
        return Err(Error::configuration(
            "providers.embedding.dimensions cannot be 0",
        ));
    }
    if providers.vector_store.collection.trim().is_empty() {
        return Err(Error::configuration(
            "providers.vector_store.collection cannot be empty",
        ));
    }
    Ok(())
}

fn validate_sources(sources: &[SourceConfig]) -> Result<()> {
    if let Some(source) = sources.iter().find(|s| s.path.as_os_str().is_empty()) {
        return Err(Error::configuration(format!(
            "ingestion source has an empty path (kind: {:?})",
            source.kind
        )));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logging configuration
    #[must_use]
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set the shared API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.providers.api_key = Some(ApiKey::new(key));
        self
    }

    /// Set embedding provider configuration
    #[must_use]
    pub fn with_embedding(mut self, embedding: crate::config::EmbeddingConfig) -> Self {
        self.config.providers.embedding = embedding;
        self
    }

    /// Set completion provider configuration
    #[must_use]
    pub fn with_completion(mut self, completion: crate::config::CompletionConfig) -> Self {
        self.config.providers.completion = completion;
        self
    }

    /// Set vector store configuration
    #[must_use]
    pub fn with_vector_store(mut self, vector_store: crate::config::VectorStoreConfig) -> Self {
        self.config.providers.vector_store = vector_store;
        self
    }

    /// Set retrieval parameters
    #[must_use]
    pub fn with_retrieval(mut self, top_k: usize, relevance_threshold: f32) -> Self {
        self.config.retrieval.top_k = top_k;
        self.config.retrieval.relevance_threshold = relevance_threshold;
        self
    }

    /// Replace the ingestion sources
    #[must_use]
    pub fn with_sources(mut self, sources: Vec<SourceConfig>) -> Self {
        self.config.ingestion.sources = sources;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}
